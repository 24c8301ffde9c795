/*!
(The representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that *u* is at least 1, and every atom issued by an [AtomDB](crate::db::atom::AtomDB) is strictly greater than every atom issued before it.

```rust
# use dadda_lib::structures::atom::Atom;
let atoms = (1..=18).collect::<Vec<Atom>>();
assert_eq!(atoms.last(), Some(&18));
```

The atom `0` is never issued, as DIMACS uses `0` to terminate a clause.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Atoms are written as signed integers, so the limit is the largest positive [i32].
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
