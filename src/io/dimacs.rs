/*!
Writing the formula of a context in DIMACS form.

The form is a header line `p cnf V C`, where `V` is the number of atoms issued by the context and `C` the number of clauses, followed by one line for each clause: the literals of the clause separated by single spaces and terminated by `0`.

Clauses are written in order of emission, and so two compilations with the same requests write identical bytes.

```rust
# use dadda_lib::context::Context;
let mut the_context = Context::default();
let [p, q] = *the_context.fresh_literals(2).unwrap().as_slice() else {
    panic!("Insufficient literals");
};
let _ = the_context.and_gate(p, -q).unwrap();

let mut dimacs = vec![];
the_context.write_dimacs(&mut dimacs).unwrap();
assert_eq!(String::from_utf8(dimacs).unwrap(), "p cnf 3 3\n-3 1 0\n-3 -2 0\n3 -1 2 0\n");
```

# Export

[export](Context::export) writes to a file atomically, as far as the filesystem allows: the formula is written to a sibling file with the suffix `.partial`, which is renamed to the requested path only once written in full.
On failure the partial file is removed, and any file previously at the requested path is untouched.
*/

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::clause::Clause,
    types::err::{self, ErrorKind},
};

impl Context {
    /// Writes the formula of the context to `writer`, in DIMACS form.
    pub fn write_dimacs(&self, mut writer: impl Write) -> Result<(), std::io::Error> {
        writeln!(writer, "p cnf {} {}", self.atom_count(), self.clause_count())?;
        for clause in self.clause_db.clauses() {
            writeln!(writer, "{}", clause.as_dimacs(true))?;
        }
        writer.flush()
    }

    /// Writes the formula of the context to a file at `path`, in DIMACS form.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<(), ErrorKind> {
        let path = path.as_ref();
        let partial = partial_path(path);

        let file = match File::create(&partial) {
            Ok(file) => file,
            Err(e) => {
                log::error!(target: targets::EXPORT, "Failed to create {}: {e}", partial.display());
                return Err(err::ExportError::Create(e.kind()).into());
            }
        };

        let mut writer = BufWriter::new(file);
        let written = self
            .write_dimacs(&mut writer)
            .and_then(|_| writer.get_ref().sync_all());
        drop(writer);

        if let Err(e) = written {
            log::error!(target: targets::EXPORT, "Failed to write {}: {e}", partial.display());
            let _ = std::fs::remove_file(&partial);
            return Err(err::ExportError::Write(e.kind()).into());
        }

        if let Err(e) = std::fs::rename(&partial, path) {
            log::error!(target: targets::EXPORT, "Failed to move to {}: {e}", path.display());
            let _ = std::fs::remove_file(&partial);
            return Err(err::ExportError::Rename(e.kind()).into());
        }

        log::info!(target: targets::EXPORT,
            "Wrote {} atoms and {} clauses to {}",
            self.atom_count(),
            self.clause_count(),
            path.display()
        );
        Ok(())
    }
}

/// The sibling of `path` with `.partial` appended to the file name.
fn partial_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}
