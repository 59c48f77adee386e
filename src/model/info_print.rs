use super::*;
use crate::algebra::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use std::io::Write;

impl<T> ConfigurablePrintTarget for LpModel<T> {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

macro_rules! expformat {
    ($fmt:expr,$val:expr) => {
        if $val.is_finite() {
            _exp_str_reformat(format!($fmt, $val))
        } else {
            format!($fmt, $val)
        }
    };
}

impl<T> LpModel<T>
where
    T: FloatT,
{
    /// Prints the input dimensions, coefficient ranges and the result of
    /// preprocessing to the configured print target.
    pub fn print_summary(&mut self) -> std::io::Result<()> {
        let user = &self.user;
        let out = &mut self.stream;

        writeln!(out, "Input")?;
        writeln!(out, "    variables            = {}", user.num_var())?;
        writeln!(out, "    free variables       = {}", user.num_free_var)?;
        writeln!(out, "    constraints          = {}", user.num_constr())?;
        writeln!(out, "    equality constraints = {}", user.num_eqconstr)?;
        writeln!(out, "    matrix entries       = {}", user.num_entries())?;

        _print_range(out, "matrix range        ", nonzero_range(&user.A.nzval))?;
        _print_range(out, "rhs range           ", nonzero_range(&user.rhs))?;
        _print_range(out, "objective range     ", nonzero_range(&user.obj))?;
        let bounds = user.lb.iter().chain(user.ub.iter()).filter(|v| v.is_finite());
        _print_range(out, "bounds range        ", nonzero_range(bounds))?;

        let form = &self.form;
        writeln!(out, "Preprocessing")?;
        writeln!(out, "    dualized model       = {}", _bool_yes_no(form.is_dualized()))?;
        writeln!(out, "    dense columns        = {}", form.dense.num_dense)?;
        if self.settings.scale {
            let (lo, hi) = self.scaled.scaling.factor_range();
            writeln!(
                out,
                "    scaling factors      = [{}, {}]",
                expformat!("{:.2e}", lo),
                expformat!("{:.2e}", hi)
            )?;
        }
        writeln!(out, "    scaled cost norm     = {}", expformat!("{:.2e}", form.norm_c))?;
        writeln!(out, "    scaled bounds norm   = {}", expformat!("{:.2e}", form.norm_bounds))?;
        out.flush()
    }
}

// smallest and largest magnitude over the nonzero entries,
// (0,0) if there are none
fn nonzero_range<'a, T: FloatT>(values: impl IntoIterator<Item = &'a T>) -> (T, T) {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| **v != T::zero())
        .fold((T::infinity(), T::zero()), |(lo, hi), v| {
            (T::min(lo, v.abs()), T::max(hi, v.abs()))
        });
    if lo.is_infinite() {
        (T::zero(), T::zero())
    } else {
        (lo, hi)
    }
}

fn _print_range<T: FloatT>(
    out: &mut PrintTarget,
    label: &str,
    (lo, hi): (T, T),
) -> std::io::Result<()> {
    writeln!(
        out,
        "    {} = [{}, {}]",
        label,
        expformat!("{:.0e}", lo),
        expformat!("{:.0e}", hi)
    )
}

fn _bool_yes_no(v: bool) -> &'static str {
    match v {
        true => "yes",
        false => "no",
    }
}

// convert a string in LowerExp display format into one that
// always has a sign and at least two digits in the exponent

fn _exp_str_reformat(mut thestr: String) -> String {
    let Some(eidx) = thestr.find('e') else {
        return thestr;
    };
    let exp = &thestr[eidx + 1..];
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(d) => ("-", d.to_string()),
        None => ("+", exp.to_string()),
    };
    thestr.truncate(eidx + 1);
    thestr.push_str(sign);
    if digits.len() < 2 {
        thestr.push('0');
    }
    thestr.push_str(&digits);
    thestr
}

#[test]
fn test_exp_str_reformat() {
    assert_eq!(_exp_str_reformat(format!("{:.2e}", 1.5_f64)), "1.50e+00");
    assert_eq!(_exp_str_reformat(format!("{:.0e}", 0.001_f64)), "1e-03");
    assert_eq!(_exp_str_reformat(format!("{:.2e}", 2.5e120_f64)), "2.50e+120");
}

#[test]
fn test_nonzero_range() {
    let v = [0., -4., 0.5, 2.];
    assert_eq!(nonzero_range(&v), (0.5, 4.));
    assert_eq!(nonzero_range(&[0.0_f64; 3]), (0., 0.));
}
