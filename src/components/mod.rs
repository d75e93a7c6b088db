pub mod day_accordion;
pub mod day_cells;
pub mod day_grid;
pub mod forecast_card;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use day_accordion::{DayAccordion, DayAccordionProps};
pub use day_grid::{DayGrid, DayGridProps};
pub use forecast_card::{
    CardLayout, ERROR_ICON, EXPANDED_MIN_WIDTH, ForecastCard, ForecastCardProps,
};
