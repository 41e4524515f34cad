//! Emits javascript for a parsed sprig tree.
//!
//! | sprig                        | javascript                      |
//! |------------------------------|---------------------------------|
//! | `def name(a, b) body end`    | `const name = (a,b) => body;`   |
//! | `f(x, 1)`                    | `f(x,1)`                        |
//! | `12`                         | `12`                            |
//! | `x`                          | `x`                             |

use itertools::Itertools as _;
use sprig_ast::{CallExpr, Definition, Expr, IntegerExpr, VarRefExpr};

/// Something that can be emitted as javascript
pub trait Generate {
    /// Gets the javascript for this node
    fn generate(&self) -> String;
}

/// Emits javascript for any sprig node
#[inline]
pub fn generate<G: Generate + ?Sized>(node: &G) -> String {
    node.generate()
}

impl Generate for Definition {
    fn generate(&self) -> String {
        format!(
            "const {} = ({}) => {};",
            self.name(),
            self.parameters().iter().join(","),
            self.body().generate()
        )
    }
}

impl Generate for Expr {
    fn generate(&self) -> String {
        match self {
            Expr::Call(call) => call.generate(),
            Expr::Integer(integer) => integer.generate(),
            Expr::VarRef(var_ref) => var_ref.generate(),
        }
    }
}

impl Generate for CallExpr {
    fn generate(&self) -> String {
        format!(
            "{}({})",
            self.name(),
            self.arguments().iter().map(Generate::generate).join(",")
        )
    }
}

impl Generate for IntegerExpr {
    fn generate(&self) -> String {
        self.digits().to_string()
    }
}

impl Generate for VarRefExpr {
    fn generate(&self) -> String {
        self.name().to_string()
    }
}
