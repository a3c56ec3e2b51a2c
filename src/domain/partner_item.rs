use std::fmt;

use crate::common::money::Money;

/// Characters of the combined field that hold the (padded) name.
pub const NAME_WIDTH: usize = 59;
/// Offset at which the description starts in the combined field.
pub const DESCRIPTION_OFFSET: usize = 60;
const NO_BREAK_SPACE: char = '\u{a0}';

/// A line of the partner catalog.
///
/// The partner packs name and description into one fixed-width field: the name
/// is padded (usually with no-break spaces) to 59 characters, one separator
/// character follows, and the description starts at character 60.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerStockItem {
    department_id: i64,
    code: String,
    name_and_description: String,
    unit_price_pence: i64,
    quantity_in_stock: u32,
}

impl PartnerStockItem {
    /// Fails when the combined field is too short to hold a description.
    pub fn new(
        department_id: i64,
        code: impl Into<String>,
        name_and_description: impl Into<String>,
        unit_price_pence: i64,
        quantity_in_stock: u32,
    ) -> Result<Self, String> {
        let name_and_description = name_and_description.into();
        let width = name_and_description.chars().count();
        if width < DESCRIPTION_OFFSET {
            return Err(format!(
                "name and description field is {width} characters, expected at least {DESCRIPTION_OFFSET}"
            ));
        }
        Ok(Self {
            department_id,
            code: code.into(),
            name_and_description,
            unit_price_pence,
            quantity_in_stock,
        })
    }

    pub fn department_id(&self) -> i64 {
        self.department_id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> String {
        let name: String = self
            .name_and_description
            .chars()
            .take(NAME_WIDTH)
            .filter(|c| *c != NO_BREAK_SPACE)
            .collect();
        name.trim_end().to_string()
    }

    pub fn description(&self) -> String {
        self.name_and_description
            .chars()
            .skip(DESCRIPTION_OFFSET)
            .collect()
    }

    pub fn unit_price_pence(&self) -> i64 {
        self.unit_price_pence
    }

    pub fn unit_price(&self) -> Money {
        Money::new(self.unit_price_pence)
    }

    pub fn quantity_in_stock(&self) -> u32 {
        self.quantity_in_stock
    }

    pub fn set_quantity(&mut self, new_quantity: i64) -> bool {
        match u32::try_from(new_quantity) {
            Ok(q) => {
                self.quantity_in_stock = q;
                true
            }
            Err(_) => false,
        }
    }
}

impl fmt::Display for PartnerStockItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} - {} - {} - UNIT PRICE: £{} - QTY: {}",
            self.department_id,
            self.code,
            self.name(),
            self.description(),
            self.unit_price(),
            self.quantity_in_stock
        )
    }
}
