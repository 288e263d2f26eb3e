/// Fenced code block type with owned delimiter constant.
///
/// Fenced code is a raw zone: once open, no block or inline rule applies to
/// the enclosed lines until a closing fence appears.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the trimmed language tag if `trimmed` opens (or closes) a fence.
    ///
    /// Opening and closing fences share a signature: any line starting with
    /// three backticks. The tag may be empty.
    pub fn sig(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::BACKTICKS).map(str::trim)
    }

    /// Maps a fence tag to a block language, treating an empty tag as absent.
    pub fn language(tag: &str) -> Option<String> {
        if tag.is_empty() {
            None
        } else {
            Some(tag.to_string())
        }
    }

    /// Whether a raw line inside an open fence closes it.
    pub fn closes(raw: &str) -> bool {
        raw.trim().starts_with(Self::BACKTICKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_fence_with_language() {
        assert_eq!(CodeFence::sig("```json"), Some("json"));
        assert_eq!(CodeFence::sig("```  py "), Some("py"));
    }

    #[test]
    fn detect_bare_fence() {
        assert_eq!(CodeFence::sig("```"), Some(""));
        assert_eq!(CodeFence::language(""), None);
        assert_eq!(CodeFence::language("rust"), Some("rust".to_string()));
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello"), None);
        assert_eq!(CodeFence::sig("``not enough"), None);
        assert_eq!(CodeFence::sig("~~~"), None);
    }

    #[test]
    fn closes_on_indented_fence() {
        assert!(CodeFence::closes("```"));
        assert!(CodeFence::closes("   ```trailing"));
        assert!(!CodeFence::closes("x = 1 ```"));
    }
}
