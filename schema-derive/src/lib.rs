extern crate proc_macro;

mod ast;
mod expand;
mod pathing;

use proc_macro::TokenStream;
use syn::Error;
use crate::ast::SchemaInput;

///
/// Macro that declares a static EBML element [`Catalog`][catalog] from a path-style table.
///
/// Each line names an element by its document path, followed by its data type and id.  Optional flags in square brackets mark the element as `mandatory` and/or `multiple`.  Elements whose names are not valid Rust identifiers can be renamed with `as "Name"`.
///
///   * A single-segment path (`EBML`) declares a root element.
///   * `(-)/Name` declares a global element that may appear under any Master element.
///   * Anything else declares a child of the second-to-last path segment, which must itself be declared as a Master element with a matching path.
///
/// ```ignore
/// use ebml_splice::schema::ebml_schema;
///
/// ebml_schema! {
///     pub static MY_FORMAT {
///         (-)/Void: Binary = 0xEC [multiple],
///         (-)/Crc32 as "CRC-32": Uint = 0xBF,
///         Root: Master = 0x1A45DFA3 [mandatory],
///         Root/Title: Utf8 = 0x7BA9,
///     }
/// }
/// ```
///
/// The generated catalog refers to items through the `ebml_splice::schema` path, so the `ebml-splice` crate must be available to the calling crate.
///
/// [catalog]: ebml_splice_schema::Catalog
///
#[proc_macro]
pub fn ebml_schema(input: TokenStream) -> TokenStream {
    let input = match syn::parse::<SchemaInput>(input) {
        Ok(syntax_tree) => syntax_tree,
        Err(err) => {
            let mut hint = Error::new(err.span(), "ebml_schema! {} content must be of format: static NAME {\
                Root: Type = id [flags],\
                Path/Of/Element: Type = id,\
                // example\
                EBML: Master = 0x1A45DFA3 [mandatory, multiple],\
                EBML/EBMLVersion: Uint = 0x4286 [mandatory],\
                // global elements use the (-) marker\
                (-)/Crc32 as \"CRC-32\": Uint = 0xBF,\
            }");
            hint.combine(err);
            return TokenStream::from(hint.to_compile_error());
        },
    };

    expand::impl_ebml_schema(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
