pub type CmdResult<T> = restyle::Result<(T, i32)>;

pub mod run;
