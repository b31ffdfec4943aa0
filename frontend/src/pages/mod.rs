pub mod login;
pub mod me;
pub mod register;
pub mod sessions;

pub use login::LoginViewModel;
pub use me::MeViewModel;
pub use register::RegisterViewModel;
pub use sessions::{FormMode, SessionDetailViewModel, SessionFormViewModel, SessionListViewModel};
