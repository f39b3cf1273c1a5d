pub mod array_input;
pub mod card_animated;
pub mod editable_panel;
pub mod expandable;
pub mod page_header;
pub mod ui;

pub use array_input::{JsonnetVarsInput, MapInput, NameValueInput, StringArrayInput};
pub use card_animated::CardAnimated;
pub use editable_panel::{EditablePanel, PanelItem, PanelSection};
pub use expandable::Expandable;
pub use page_header::PageHeader;
