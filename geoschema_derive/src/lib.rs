//! Procedural macros shared by the geoschema crates.
//!
//! The only macro exported here is [`macro@context`], an attribute that wraps the body of a
//! function returning `anyhow::Result` and attaches a formatted context message to any error
//! it produces. Parsers use it to build readable error chains such as
//! `while parsing POLYGON: while parsing a position: expected a number at position 12`.

mod args;

use crate::args::Args;
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::{ToTokens, quote};
use syn::{ItemFn, ReturnType, Type, parse_macro_input};

/// Attach a context message to every error returned by the annotated function.
///
/// The arguments are passed to `format!`, so they may reference the function's parameters.
/// Prefix them with `move,` to move captured parameters into the wrapping closure.
///
/// Works on plain and `async` functions.
#[proc_macro_attribute]
pub fn context(args: TokenStream, input: TokenStream) -> TokenStream {
	let args = parse_macro_input!(args as Args);
	let mut function = parse_macro_input!(input as ItemFn);

	let return_type = match &function.sig.output {
		ReturnType::Type(_, return_type) => return_type.as_ref().clone(),
		ReturnType::Default => {
			return syn::Error::new_spanned(&function.sig, "#[context] needs a function returning a Result")
				.to_compile_error()
				.into();
		}
	};

	let body = if function.sig.asyncness.is_some() {
		wrap_async(&args, &return_type, &function.block)
	} else {
		wrap_sync(&args, &return_type, &function.block)
	};
	function.block.stmts = vec![syn::Stmt::Expr(syn::Expr::Verbatim(body), None)];

	function.into_token_stream().into()
}

fn add_context(args: &Args) -> TokenStream2 {
	let err = Ident::new("err", Span::mixed_site());
	let format_args = &args.1;
	quote! { .map_err(|#err| #err.context(format!(#format_args)).into()) }
}

fn wrap_async(args: &Args, return_type: &Type, body: &syn::Block) -> TokenStream2 {
	let result = Ident::new("result", Span::mixed_site());
	let move_token = &args.0;
	let add_context = add_context(args);
	quote! {
		let #result: #return_type = async #move_token #body.await;
		#result #add_context
	}
}

fn wrap_sync(args: &Args, return_type: &Type, body: &syn::Block) -> TokenStream2 {
	// A non-`Copy` value moved into the closure forces it to be `FnOnce`.
	let once = Ident::new("once", Span::mixed_site());
	let move_token = &args.0;
	let add_context = add_context(args);
	quote! {
		let #once = ::core::iter::empty::<()>();
		(#move_token || -> #return_type {
			::core::mem::drop(#once);
			#body
		})() #add_context
	}
}
