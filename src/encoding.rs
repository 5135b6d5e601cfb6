use crate::character_sets::FORM_URLENCODED_SET;
use crate::compat::{Cow, String, ToString};
use percent_encoding::{percent_decode_str, utf8_percent_encode};

// Form encoding per https://url.spec.whatwg.org/#application/x-www-form-urlencoded

/// Write a form-urlencoded component directly to buffer.
/// Spaces become `+`; everything in `FORM_URLENCODED_SET` is percent-encoded.
pub fn form_encode_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());

    for (i, segment) in input.split(' ').enumerate() {
        if i > 0 {
            buffer.push('+');
        }
        for chunk in utf8_percent_encode(segment, FORM_URLENCODED_SET) {
            buffer.push_str(chunk);
        }
    }
}

/// Decode a form-urlencoded component.
/// `+` decodes to space, invalid escapes pass through, invalid UTF-8 is replaced.
pub fn form_decode(input: &str) -> String {
    let plus_decoded: Cow<'_, str> = if memchr::memchr(b'+', input.as_bytes()).is_some() {
        Cow::Owned(input.replace('+', " "))
    } else {
        Cow::Borrowed(input)
    };

    percent_decode_str(&plus_decoded)
        .decode_utf8_lossy()
        .to_string()
}
