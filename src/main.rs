use stock_control::common::error::AppError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = stock_control::app::run(std::env::args_os()) {
        match e {
            AppError::Parse(msg) => eprintln!("{msg}"),
            other => eprintln!("Error: {other}"),
        }
        std::process::exit(1);
    }
}
