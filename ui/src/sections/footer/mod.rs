mod model;
pub use model::FooterView;

mod view;
pub use view::SiteFooter;
