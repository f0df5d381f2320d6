/// Errors raised while framing or unframing tokens.
pub mod codec_error;
