/*!
Databases for holding the state of a compilation.

- The [atom database](atom) issues fresh atoms.
- The [clause database](clause) holds the emitted formula.

Both databases only grow, and are owned by a [context](crate::context).
*/

pub mod atom;
pub mod clause;
