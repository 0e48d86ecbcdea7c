/// Tool badges such as "Top Rated" and "Best Value".
pub mod badges;
/// The comparison grid and its HTML table.
pub mod comparisontable;
/// Escaping and class-name helpers shared by the renderers.
pub mod markup;
/// Pros/cons lists for review pages.
pub mod proscons;
/// Five-symbol star ratings.
pub mod stars;

pub use badges::{Badge, badges_for};
pub use comparisontable::{Cell, ColumnHeader, ComparisonGrid, FeatureRow, PriceCell};
pub use comparisontable::{render_comparison_table, render_table_html};
pub use proscons::render_pros_cons;
pub use stars::{Star, render_stars, render_stars_html};
