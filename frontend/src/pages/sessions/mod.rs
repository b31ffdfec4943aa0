pub mod detail;
pub mod form;
pub mod list;
pub mod utils;

pub use detail::SessionDetailViewModel;
pub use form::{FormMode, SessionFormViewModel};
pub use list::SessionListViewModel;
