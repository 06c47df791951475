/*!
# Service Data Model

Wire-compatible model of the compiler service artifacts: tokens, symbol
scopes, quadruples, aggregate metrics and the compile response envelope.
All shapes preserve the service's exact snake_case field names.
*/

pub mod metrics;
pub mod quadruple;
pub mod response;
pub mod symbols;
pub mod token;

pub use metrics::CompileMetrics;
pub use quadruple::{Quadruple, QuadrupleKind};
pub use response::{CompileRequest, CompileResponse};
pub use symbols::{DataType, ScopeTable, Symbol, SymbolType};
pub use token::{Token, TokenType};
