mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `ErrorKind` trait from `steps-error` for the given struct.
///
/// The report is described with the `error` attribute:
///
/// ```ignore
/// use steps_attrs::ErrorKind;
/// use steps_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("expected {} operands", self.expected),
///     labels = ["this operator"],
///     help = "add more operands",
/// )]
/// pub struct NotEnoughOperands {
///     expected: usize,
/// }
/// ```
///
/// | Tag       | Description                                                                  |
/// | --------- | ---------------------------------------------------------------------------- |
/// | `message` | The message displayed at the top of the report.                              |
/// | `labels`  | An iterable of label texts, paired in order with the spans of the error.     |
/// | `help`    | Optional help text describing what the user can do about the error.         |
///
/// Each tag is an expression evaluated with the named fields of the struct in scope. Tuple
/// structs are rejected.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #target
        }
    }.into()
}
