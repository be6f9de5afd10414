//! Host rendering contract.

/// Draw target supplied by the host. The core never builds or inspects
/// `Options`; they are handed through from [`Animator::draw`](crate::Animator::draw).
pub trait DrawSink<I> {
    type Options;

    fn draw_image(&mut self, image: &I, options: &Self::Options);
}
