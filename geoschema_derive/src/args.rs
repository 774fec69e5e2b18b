use proc_macro2::TokenStream as TokenStream2;
use syn::Token;
use syn::parse::{self, Parse, ParseStream};

/// Arguments of `#[context(...)]`: an optional leading `move,` followed by `format!` arguments.
#[derive(Debug)]
pub struct Args(pub Option<Token![move]>, pub TokenStream2);

impl Parse for Args {
	fn parse(input: ParseStream<'_>) -> parse::Result<Self> {
		let move_token = if input.peek(Token![move]) {
			let token = input.parse()?;
			input.parse::<Token![,]>()?;
			Some(token)
		} else {
			None
		};
		Ok(Self(move_token, input.parse()?))
	}
}

#[cfg(test)]
mod tests {
	use super::Args;
	use syn::parse_str;

	#[test]
	fn parse_message_only() {
		let args: Args = parse_str("\"while parsing a ring\"").unwrap();
		assert!(args.0.is_none());
		assert_eq!(args.1.to_string(), "\"while parsing a ring\"");
	}

	#[test]
	fn parse_with_move() {
		let args: Args = parse_str("move, index").unwrap();
		assert!(args.0.is_some());
		assert_eq!(args.1.to_string(), "index");
	}

	#[test]
	fn parse_missing_comma_after_move() {
		let err = parse_str::<Args>("move foo").unwrap_err();
		assert!(err.to_string().contains(','), "expected comma error, got: {err}");
	}
}
