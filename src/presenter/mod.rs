pub mod facts;
pub mod gallery;
pub mod listeners;
pub mod markup;
pub mod modal;

pub use gallery::{Gallery, GalleryState};
pub use listeners::{Activation, Disposable, ListenerRegistry, Trigger};
pub use modal::{DetailMedia, DetailView, Modal, ModalInput, ModalState};
