pub mod fetch_html;
pub mod product_log;
