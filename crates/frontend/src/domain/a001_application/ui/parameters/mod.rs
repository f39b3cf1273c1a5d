//! Source parameters of an application: the editable panel and the page
//! that loads the application and saves it back.

mod page;
mod panel;
mod sections;
mod view_model;

pub use page::ApplicationParametersPage;
pub use panel::ApplicationParameters;
pub use view_model::{ParametersVm, SaveFuture, SaveHandler};
