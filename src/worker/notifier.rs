use crate::domain::stock_item::StockItem;

/// Receives every item the ledger changes.
pub trait StockListener {
    fn on_stock_changed(&mut self, item: &StockItem);
}

impl<F> StockListener for F
where
    F: FnMut(&StockItem),
{
    fn on_stock_changed(&mut self, item: &StockItem) {
        (*self)(item)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Synchronous "item changed" broadcaster.
///
/// Listeners run on the publishing thread, in registration order, before
/// [`ChangeNotifier::publish`] returns. A listener that panics is not isolated:
/// the panic unwinds through `publish` and later listeners miss the event.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Vec<(ListenerId, Box<dyn StockListener>)>,
    next_id: u64,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl StockListener + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn publish(&mut self, item: &StockItem) {
        for (_, listener) in self.listeners.iter_mut() {
            listener.on_stock_changed(item);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
