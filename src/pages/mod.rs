//! Tab panes of the panel.

mod clientes;
mod productos;
mod ventas;

pub use clientes::Clientes;
pub use productos::Productos;
pub use ventas::Ventas;
