pub mod colors;
pub mod dashboard;
pub mod page;
pub mod painter;
pub mod results_view;
pub mod schedule_view;
pub mod standings_view;
pub mod view_state;

pub use dashboard::{Dashboard, DashboardView, RefreshTicket};
pub use page::RenderOptions;
pub use results_view::render_results;
pub use schedule_view::render_schedule;
pub use standings_view::render_standings;
pub use view_state::{ViewSlot, ViewState};
