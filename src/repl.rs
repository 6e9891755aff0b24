use std::io::{BufRead, Write};

pub type ShouldStop = bool;

/// Read lines from `input` and hand each one to `step`, until `step` asks to
/// stop or the input ends. Returns the final state.
pub fn repl<R, W, Err, State>(
    input: &mut R,
    output: &mut W,
    initial_state: State,
    mut step: impl FnMut(&str, &mut State, &mut W) -> Result<ShouldStop, Err>,
) -> Result<State, Err>
where
    R: BufRead,
    W: Write,
    Err: From<std::io::Error>,
{
    let mut line = String::new();
    let mut state = initial_state;
    loop {
        write!(output, ">   ")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break Ok(state);
        }
        let should_stop = step(line.trim_end_matches(['\n', '\r']), &mut state, output)?;
        if should_stop {
            break Ok(state);
        }
    }
}
