//! Code sample rendering for showcase panels.
//!
//! The assembler does not know how code gets colored; it hands the literal
//! sample and its language tag to a [`Highlighter`] and embeds whatever markup
//! comes back. [`PlainHighlighter`] is the built-in implementation: escaped
//! text split into lines, tagged with a `language-*` class so a client-side
//! highlighter (or plain CSS) can pick it up.
//!
//! ```html
//! <pre class="code-block language-js" data-language="js"><code>
//!   <span class="line"><span class="line-number">1</span>import "io"</span>
//!   ...
//! </code></pre>
//! ```

use maud::{Markup, html};

/// Renders a code sample to markup.
pub trait Highlighter {
    fn highlight(&self, sample: &str, language_tag: &str) -> Markup;
}

/// Escaped, line-split code block with optional line numbers.
#[derive(Debug, Clone, Copy)]
pub struct PlainHighlighter {
    pub line_numbers: bool,
}

impl Default for PlainHighlighter {
    fn default() -> Self {
        Self { line_numbers: true }
    }
}

impl Highlighter for PlainHighlighter {
    fn highlight(&self, sample: &str, language_tag: &str) -> Markup {
        let class = format!("code-block language-{}", language_tag);
        html! {
            pre class=(class) data-language=(language_tag) {
                code {
                    @for (idx, line) in code_lines(sample).enumerate() {
                        span.line {
                            @if self.line_numbers {
                                span.line-number { (idx + 1) }
                            }
                            (line)
                        }
                        "\n"
                    }
                }
            }
        }
    }
}

/// Lines of a sample with trailing blank lines dropped.
///
/// Leading whitespace and blank lines in the middle are part of the sample
/// and kept as-is.
fn code_lines(sample: &str) -> impl Iterator<Item = &str> {
    sample.trim_end_matches(['\n', '\r']).lines()
}
