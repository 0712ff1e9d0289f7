//! Procedural macros for the `scantap` trace instrumentation crate.
//!
//! Both macros capture the argument expression text at the call site, the
//! way a stringifying wrapper macro would in C, and expand to a call into
//! the runtime crate with a pre-tagged value per argument. They never
//! perform the read themselves; the caller reads first and traces after.

use proc_macro::TokenStream;
use quote::{ToTokens, quote};
use syn::{
    Expr, LitStr, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    token::Comma,
};

/// trace_read! arguments: format literal, then the traced expressions.
struct TraceReadArgs {
    format: LitStr,
    args: Punctuated<Expr, Comma>,
}

impl Parse for TraceReadArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let format: LitStr = input.parse()?;

        let args = if input.is_empty() {
            Punctuated::new()
        } else {
            input.parse::<Token![,]>()?;
            Punctuated::parse_terminated(input)?
        };

        Ok(Self { format, args })
    }
}

/// Traces the values of a formatted read that already happened.
///
/// # Syntax
///
/// ```ignore
/// trace_read!("format string", expr, ...)
/// ```
///
/// - `format string`: the scanf-style format string the read used
/// - `expr, ...`: the expressions the read populated, in argument order
///
/// Expands to a call to `scantap::trace_values` with the expressions
/// stringified into the name list (`"a, b"`) and each value wrapped as
/// `scantap::Value::from(&expr)`. Returns `Result<(), scantap::TraceError>`.
///
/// # Examples
///
/// ```ignore
/// let mut x: i32 = 0;
/// let mut y: f64 = 0.0;
/// // ... read x and y from stdin ...
/// trace_read!("%d %lf", x, y)?;
/// // stderr: "x,d,<x>\ny,lf,<y>\n"
/// ```
#[proc_macro]
pub fn trace_read(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as TraceReadArgs);

    let format = &args.format;
    let names = args
        .args
        .iter()
        .map(|expr| expr.to_token_stream().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let values = args.args.iter();

    let expanded = quote! {
        ::scantap::trace_values(
            #format,
            #names,
            &[#(::scantap::Value::from(&#values)),*],
        )
    };
    TokenStream::from(expanded)
}

/// Traces a plain string read (line input, stream extraction into a
/// string buffer).
///
/// # Syntax
///
/// ```ignore
/// trace_line!(buffer)
/// ```
///
/// Expands to `scantap::trace_string` with the expression stringified as
/// the name and the buffer's contents as the value, emitting one record
/// under the fixed `s` tag. Returns `Result<(), scantap::TraceError>`.
#[proc_macro]
pub fn trace_line(input: TokenStream) -> TokenStream {
    let expr = parse_macro_input!(input as Expr);
    let name = expr.to_token_stream().to_string();

    let expanded = quote! {
        ::scantap::trace_string(#name, &#expr)
    };
    TokenStream::from(expanded)
}
