pub mod option_card;
pub mod options_table;
pub mod toast;
