//! FAQ accordion. Items open and close independently.

pub const ICON_OPEN: &str = "fa-chevron-up";
pub const ICON_CLOSED: &str = "fa-chevron-down";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccordionItem {
    pub open: bool,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct Accordion {
    open: Vec<bool>,
}

impl Accordion {
    pub fn new(items: usize) -> Self {
        Self {
            open: vec![false; items],
        }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, index: usize) -> Option<AccordionItem> {
        let slot = self.open.get_mut(index)?;
        *slot = !*slot;
        Some(AccordionItem {
            open: *slot,
            icon: if *slot { ICON_OPEN } else { ICON_CLOSED },
        })
    }
}
