use crate::char_view::CharBufferView;
use crate::typed_view::TypedBufferView;
use nio_shared_lib::byte_buffer::ByteBuffer;
use nio_shared_lib::element::Element;

/// Creates element views over the remaining bytes of a ByteBuffer,
/// using the buffer's current byte order.
pub trait AsTypedView {
    fn as_typed_view<E: Element>(&self) -> TypedBufferView<E>;

    fn as_char_buffer(&self) -> CharBufferView {
        self.as_typed_view::<u16>()
    }
}

impl AsTypedView for ByteBuffer {
    fn as_typed_view<E: Element>(&self) -> TypedBufferView<E> {
        let view = TypedBufferView::new(self, self.order());
        nio_shared_lib::log_view_derived!("as_typed_view", view);
        view
    }
}

#[cfg(test)]
mod tests {
    use crate::view_ext::AsTypedView;
    use nio_shared_lib::byte_buffer::ByteBuffer;
    use nio_shared_lib::byte_order::ByteOrder;
    use nio_shared_lib::cursor::Buffer;
    use hex_literal::hex;

    #[test]
    fn uses_buffer_order() {
        let mut bb = ByteBuffer::wrap(hex!("0102030405").to_vec());
        assert_eq!(bb.as_char_buffer().get_at(0).unwrap(), 0x0102);
        bb.set_order(ByteOrder::LittleEndian);
        bb.set_position(1).unwrap();
        let view = bb.as_char_buffer();
        assert_eq!(view.order(), ByteOrder::LittleEndian);
        assert_eq!(view.capacity(), 2);
        assert_eq!(view.get_at(0).unwrap(), 0x0302);
        assert_eq!(bb.as_typed_view::<u32>().get_at(0).unwrap(), 0x0504_0302);
    }

    #[test]
    fn view_keeps_store_alive() {
        let view = ByteBuffer::wrap(vec![0, 0x41]).as_char_buffer();
        assert_eq!(view.to_string(), "A");
    }
}
