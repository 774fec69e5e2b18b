mod array;
mod number;
mod object;
mod value;

pub use array::*;
pub use object::*;
pub use value::*;
