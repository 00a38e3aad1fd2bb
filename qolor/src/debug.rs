///
/// Introspection Reports
///
/// Human-readable dumps of pipeline types, cursor capabilities and callable
/// signatures, for inspecting what a chain of adaptors resolved to. Every
/// report writes to any `io::Write` and starts with a banner line.
///

use std::any::type_name;
use std::fmt::Debug;
use std::io::{self, Write};
use std::mem::{align_of, needs_drop, size_of};

use crate::functional::{Functional, describe};
use crate::iterable::Iterable;
use crate::traits::{Capabilities, Cursor};

const LABEL_WIDTH: usize = 14;

fn banner(out: &mut impl Write, header: &str) -> io::Result<()> {
    writeln!(out, "================= {header} =================")?;
    writeln!(out)
}

fn field(out: &mut impl Write, label: &str, value: impl std::fmt::Display) -> io::Result<()> {
    writeln!(out, "{label:>width$}: {value}", width = LABEL_WIDTH)
}

/// Prints the pipeline's cursor type and item type, then, when `run` is
/// set, walks the pipeline and prints every element.
pub fn report_iterable<C>(
    out: &mut impl Write,
    header: &str,
    iterable: Iterable<C>,
    run: bool,
) -> io::Result<()>
where
    C: Cursor,
    C::Item: Clone + Debug,
{
    banner(out, header)?;
    field(out, "expression", type_name::<C>())?;
    field(out, "item", type_name::<C::Item>())?;
    if run {
        write!(out, "{:>width$}:", "iteration", width = LABEL_WIDTH)?;
        for value in iterable {
            write!(out, " {value:?}")?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Prints a scalar result and its type.
pub fn report_value<T: Debug>(out: &mut impl Write, header: &str, value: &T) -> io::Result<()> {
    banner(out, header)?;
    field(out, "type", type_name::<T>())?;
    field(out, "value", format_args!("{value:?}"))?;
    writeln!(out)
}

pub fn report_cursor<C: Cursor>(out: &mut impl Write, header: &str) -> io::Result<()> {
    let caps = Capabilities::of::<C>();
    banner(out, header)?;
    field(out, "cursor", type_name::<C>())?;
    field(out, "item", caps.item)?;
    field(out, "item_size", caps.item_size)?;
    field(out, "category", caps.category)?;
    field(out, "writable", caps.writable)?;
    field(out, "bidirectional", caps.bidirectional)?;
    field(out, "resettable", caps.resettable)?;
    writeln!(out)
}

pub fn report_functional<F, Args>(out: &mut impl Write, header: &str, f: &F) -> io::Result<()>
where
    F: Functional<Args>,
{
    let traits = describe::<F, Args>(f);
    banner(out, header)?;
    field(out, "callable", type_name::<F>())?;
    field(out, "arity", traits.arity)?;
    field(out, "arguments", traits.arguments)?;
    field(out, "output", traits.output)?;
    writeln!(out)
}

pub fn report_type<T>(out: &mut impl Write, header: &str) -> io::Result<()> {
    banner(out, header)?;
    field(out, "type", type_name::<T>())?;
    field(out, "size", size_of::<T>())?;
    field(out, "align", align_of::<T>())?;
    field(out, "needs_drop", needs_drop::<T>())?;
    writeln!(out)
}
