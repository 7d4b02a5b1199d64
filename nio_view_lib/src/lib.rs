pub mod typed_view;
pub mod char_view;
pub mod view_ext;

pub use char_view::CharBufferView;
pub use typed_view::TypedBufferView;
pub use view_ext::AsTypedView;
