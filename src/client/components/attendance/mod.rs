pub mod class_selector;
pub mod daily_tab;
pub mod date_navigator;
pub mod records_tab;
pub mod stats_cards;

pub use class_selector::ClassSelector;
pub use daily_tab::DailyTab;
pub use date_navigator::DateNavigator;
pub use records_tab::RecordsTab;
pub use stats_cards::StatsCards;
