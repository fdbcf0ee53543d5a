pub mod about;
pub mod admin;
pub mod admin_login;
pub mod all_articles;
pub mod article_detail;
pub mod category;
pub mod contact;
pub mod home;
pub mod newsletter;
pub mod not_found;
