/// Hook for reshaping example sentences before they are rendered.
///
/// Segmentation is not implemented yet; the default method returns the
/// sentence unchanged.
pub trait SentenceFormatter {
    fn format(&self, sentence: &str) -> String {
        sentence.to_string()
    }
}

pub struct PassThrough;
impl SentenceFormatter for PassThrough {}

// TODO: plug a morphological segmenter in behind SentenceFormatter
pub fn format_sentence(sentence: &str) -> String {
    PassThrough.format(sentence)
}
