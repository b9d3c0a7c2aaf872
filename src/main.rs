//! Interactive driver for [`BoundedMinHeap`]
//!
//! Reads one integer command per menu round from standard input and
//! applies it to a single heap owned by the [`Menu`] context. The loop
//! is generic over `BufRead`/`Write` so the whole dialog can be
//! exercised in tests with in-memory buffers.

use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;

use clap::Parser;

use capheap::BoundedMinHeap;

#[derive(Parser, Debug)]
#[command(name = "capheap")]
#[command(version)]
#[command(about = "Interactive capacity-bounded min-heap workbench", long_about = None)]
struct Args {
    #[clap(
        short,
        long,
        default_value = "11",
        help = "Maximum number of keys the heap can hold"
    )]
    capacity: NonZeroUsize,
}

/// Owning context for the interactive session: one heap, no globals.
struct Menu {
    heap: BoundedMinHeap,
}

impl Menu {
    fn new(capacity: NonZeroUsize) -> Self {
        Self {
            heap: BoundedMinHeap::new(capacity),
        }
    }

    /// Runs the menu loop until command `0` or end of input.
    fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        loop {
            writeln!(out)?;
            writeln!(out, "1. Insert key")?;
            writeln!(out, "2. Delete key at position")?;
            writeln!(out, "3. Display heap")?;
            writeln!(out, "4. Display every node's children")?;
            writeln!(out, "0. Exit")?;
            out.flush()?;

            let line = match read_line(input)? {
                Some(line) => line,
                None => break,
            };

            match line.trim().parse::<i64>() {
                Ok(1) => self.insert(input, out)?,
                Ok(2) => self.delete(input, out)?,
                Ok(3) => self.display(out)?,
                Ok(4) => self.display_children(out)?,
                Ok(0) => {
                    writeln!(out, "Exiting.")?;
                    break;
                }
                _ => writeln!(out, "Invalid option!")?,
            }
        }
        Ok(())
    }

    fn insert<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        write!(out, "Key to insert: ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(());
        };
        let Ok(key) = line.trim().parse::<i32>() else {
            return writeln!(out, "Expected an integer key.");
        };

        match self.heap.push(key) {
            Ok(()) => writeln!(out, "Inserted {}.", key),
            Err(e) => writeln!(out, "Insert failed: {}", e),
        }
    }

    fn delete<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        write!(out, "Position to delete: ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(());
        };
        let Ok(index) = line.trim().parse::<usize>() else {
            return writeln!(out, "Expected a non-negative position.");
        };

        match self.heap.remove(index) {
            Ok(key) => writeln!(out, "Deleted {} from position {}.", key, index),
            Err(e) => writeln!(out, "Delete failed: {}", e),
        }
    }

    fn display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.heap.is_empty() {
            return writeln!(out, "(empty)");
        }

        let rendered: Vec<String> = self.heap.iter().map(i32::to_string).collect();
        writeln!(out, "{}", rendered.join(" "))
    }

    fn display_children<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.heap.is_empty() {
            return writeln!(out, "(empty)");
        }

        let keys = self.heap.as_slice();
        for (i, key) in keys.iter().enumerate() {
            writeln!(out, "Node: {}", key)?;
            if let Some(l) = keys.get(2 * i + 1) {
                writeln!(out, "Left child: {}", l)?;
            }
            if let Some(r) = keys.get(2 * i + 2) {
                writeln!(out, "Right child: {}", r)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Reads one line, returning `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut menu = Menu::new(args.capacity);
    menu.run(&mut stdin.lock(), &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(capacity: usize, script: &str) -> String {
        let mut menu = Menu::new(NonZeroUsize::new(capacity).unwrap());
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        menu.run(&mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_insert_and_display() {
        let out = run_session(11, "1\n3\n1\n2\n1\n15\n3\n0\n");
        assert!(out.contains("Inserted 3."));
        assert!(out.contains("Inserted 2."));
        assert!(out.contains("Inserted 15."));
        // Heap order after 3, 2, 15: 2 at the root.
        assert!(out.contains("2 3 15"));
        assert!(out.contains("Exiting."));
    }

    #[test]
    fn test_delete_at_position() {
        let out = run_session(11, "1\n5\n1\n9\n2\n0\n3\n0\n");
        assert!(out.contains("Deleted 5 from position 0."));
        assert!(out.contains("\n9\n"));
    }

    #[test]
    fn test_overflow_is_reported() {
        let out = run_session(1, "1\n5\n1\n6\n0\n");
        assert!(out.contains("Inserted 5."));
        assert!(out.contains("Insert failed: heap is at capacity"));
    }

    #[test]
    fn test_delete_out_of_range_is_reported() {
        let out = run_session(4, "2\n7\n0\n");
        assert!(out.contains("Delete failed: index does not refer to a live element"));
    }

    #[test]
    fn test_invalid_option_reprompts() {
        let out = run_session(4, "9\nhello\n0\n");
        assert_eq!(out.matches("Invalid option!").count(), 2);
        assert!(out.contains("Exiting."));
    }

    #[test]
    fn test_display_children_lists_existing_children_only() {
        let out = run_session(11, "1\n3\n1\n2\n1\n15\n1\n5\n4\n0\n");
        // Root 2 has both children; 5's node is a leaf.
        assert!(out.contains("Node: 2\nLeft child: 3\nRight child: 15"));
        assert!(out.contains("Node: 5\n"));
    }

    #[test]
    fn test_eof_terminates_loop() {
        let out = run_session(4, "1\n5\n");
        assert!(out.contains("Inserted 5."));
    }

    #[test]
    fn test_empty_display() {
        let out = run_session(4, "3\n4\n0\n");
        assert_eq!(out.matches("(empty)").count(), 2);
    }
}
