//! Call-site attribution. Walks the stack at the moment of logging and labels
//! the first frame that lies outside this crate as `Type::method` (or just
//! `function` for free functions).
//!
//! Frames are attributed to a crate through their demangled symbol path. The
//! crate's own identity is a compile-time constant, so nothing is looked up per call.

use backtrace::Symbol;

/// Crate whose frames are never reported as the caller.
pub(crate) const OWN_CRATE: &str = env!("CARGO_CRATE_NAME");

/// Produces the caller label placed between the tag and the message.
pub trait CallerResolver: Send + Sync {
    /// Empty string when no caller can be determined; never fails.
    fn resolve(&self) -> String;
}

/// Closures make convenient fixed resolvers in tests and embedders.
impl<F> CallerResolver for F
where
    F: Fn() -> String + Send + Sync,
{
    fn resolve(&self) -> String {
        self()
    }
}

/// Resolves the caller by walking the live stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackResolver;

impl CallerResolver for StackResolver {
    fn resolve(&self) -> String {
        // Frames above our own code belong to the unwinder itself; only frames
        // after the first one of ours are candidates.
        let mut seen_own = false;
        let mut label = None;

        backtrace::trace(|frame| {
            let mut found = false;
            // Inlined functions surface as several symbols on one frame, innermost first.
            backtrace::resolve_frame(frame, |symbol| {
                if found {
                    return;
                }
                let Some(name) = symbol_path(symbol) else {
                    return;
                };
                if is_own_symbol(&name) {
                    seen_own = true;
                } else if seen_own {
                    label = Some(label_from_symbol(&name));
                    found = true;
                }
            });
            !found
        });

        label.unwrap_or_default()
    }
}

/// One frame of a stack dump. Missing debug info stays `None` and is rendered as a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackLine {
    pub file: Option<String>,
    pub line: Option<u32>,
    pub function: Option<String>,
}

/// Every frame above this crate's own frames, innermost first.
#[must_use]
pub fn capture_stack() -> Vec<StackLine> {
    let mut seen_own = false;
    let mut lines = Vec::new();

    backtrace::trace(|frame| {
        let mut symbols = Vec::new();
        backtrace::resolve_frame(frame, |symbol| {
            symbols.push((
                symbol_path(symbol),
                symbol.filename().map(|p| p.display().to_string()),
                symbol.lineno(),
            ));
        });

        let own = symbols
            .iter()
            .any(|(name, _, _)| name.as_deref().is_some_and(is_own_symbol));
        if own {
            seen_own = true;
            return true;
        }
        if !seen_own {
            return true;
        }

        if symbols.is_empty() {
            lines.push(StackLine::default());
        }
        for (function, file, line) in symbols {
            lines.push(StackLine {
                file,
                line,
                function,
            });
        }
        true
    });

    lines
}

/// Demangled path without the trailing `::h<hash>`.
pub(crate) fn symbol_path(symbol: &Symbol) -> Option<String> {
    symbol
        .name()
        .map(|name| strip_hash(&format!("{name:#}")).to_string())
}

/// True when the demangled path lives in this crate, including trait impls on our types.
#[must_use]
pub fn is_own_symbol(path: &str) -> bool {
    crate_of(path) == OWN_CRATE
}

fn crate_of(path: &str) -> &str {
    let path = path
        .trim_start_matches(['<', '&', '*'])
        .trim_start_matches("mut ")
        .trim_start_matches("dyn ");
    path.find("::").map_or(path, |end| &path[..end])
}

fn strip_hash(path: &str) -> &str {
    match path.rsplit_once("::h") {
        Some((head, hash)) if hash.len() == 16 && hash.chars().all(|c| c.is_ascii_hexdigit()) => {
            head
        }
        _ => path,
    }
}

/// Splits on `::` outside of `<...>` groups.
fn split_path(path: &str) -> Vec<&str> {
    let bytes = path.as_bytes();
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&path[start..]);
    segments
}

/// Closure and shim markers (`{{closure}}`, or `{closure#0}` under v0 mangling) say
/// nothing about the enclosing function.
fn is_named_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.starts_with('{')
}

/// Drops generic arguments: `Foo<T>` becomes `Foo`.
fn bare(segment: &str) -> &str {
    segment.find('<').map_or(segment, |i| &segment[..i])
}

fn looks_like_type(segment: &str) -> bool {
    segment.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Turns a demangled symbol path into `Type::method` or `function`.
#[must_use]
pub fn label_from_symbol(path: &str) -> String {
    let path = strip_hash(path);
    let segments = split_path(path);

    // `<app::Foo as core::fmt::Display>::fmt`: the type lives inside the qualified head.
    if let Some(head) = segments.first().filter(|s| s.starts_with('<')) {
        let inner = head.trim_start_matches('<').trim_end_matches('>');
        let self_ty = inner.split(" as ").next().unwrap_or(inner);
        let ty = split_path(self_ty)
            .into_iter()
            .rev()
            .find(|s| is_named_segment(s))
            .map(bare)
            .unwrap_or_default();
        let method = segments[1..]
            .iter()
            .rev()
            .find(|s| is_named_segment(s))
            .copied();
        return match method {
            Some(method) if !ty.is_empty() => format!("{ty}::{method}"),
            Some(method) => method.to_string(),
            None => ty.to_string(),
        };
    }

    let named: Vec<&str> = segments
        .into_iter()
        .filter(|s| is_named_segment(s))
        .map(bare)
        .collect();
    match named.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [.., ty, method] if looks_like_type(ty) => format!("{ty}::{method}"),
        [.., method] => (*method).to_string(),
    }
}
