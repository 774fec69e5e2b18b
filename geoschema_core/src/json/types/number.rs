//! `From` conversions from Rust numbers into `JsonValue::Number`.

use super::JsonValue;

impl From<f64> for JsonValue {
	fn from(input: f64) -> Self {
		JsonValue::Number(input)
	}
}

macro_rules! impl_from_number_lossless {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Number(f64::from(input))
				}
			}
		)+
	};
}

macro_rules! impl_from_number_lossy {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Number(input as f64)
				}
			}
		)+
	};
}

impl_from_number_lossless!(f32, u8, u16, u32, i8, i16, i32);
impl_from_number_lossy!(u64, usize, i64, isize);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(JsonValue::from(1.5f32), 1.5)]
	#[case(JsonValue::from(255u8), 255.0)]
	#[case(JsonValue::from(-7i32), -7.0)]
	#[case(JsonValue::from(4326u32), 4326.0)]
	#[case(JsonValue::from(9_007_199_254_740_991u64), 9_007_199_254_740_991.0)]
	#[case(JsonValue::from(-3isize), -3.0)]
	fn converts_to_number(#[case] value: JsonValue, #[case] expected: f64) {
		assert_eq!(value, JsonValue::Number(expected));
	}
}
