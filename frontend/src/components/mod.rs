// Reusable components live here.

pub mod article_card;
pub mod category_highlights;
pub mod footer;
pub mod header;
pub mod loading_spinner;
pub mod newsletter_form;
pub mod stats_card;
pub mod toast;
