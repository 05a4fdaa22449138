//! 交互式命令循环：每条命令对应一次文件系统操作，
//! 出错时打印错误信息并继续等待下一条命令。

#[cfg(test)]
mod tests;

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use block_dev::BlockDevice;
use derive_more::From;
use myfs::MyFileSystem;

const FS_NAME: &str = "myfs";
const LINE_START: &str = "myfs$ ";

const HELP: &str = "The following commands are supported:
ls [<directory>] - list directory content.
cat <path> - show file content.
touch <path> - create empty file.
mkdir <path> - create empty directory.
edit <path> - re-set file content.
rm <path> - remove file.
help - show this help message.
exit - gracefully exit.
";

#[derive(Debug, From)]
enum ShellError {
    Fs(myfs::Error),
    Io(io::Error),
}

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    List(&'a str),
    Cat(&'a str),
    Touch(&'a str),
    Mkdir(&'a str),
    Edit(&'a str),
    Remove(&'a str),
    Help,
    Exit,
}

impl<'a> Command<'a> {
    /// 解析失败时返回应打印给用户的提示
    fn parse(args: &[&'a str]) -> Result<Self, String> {
        let path = |usage: &str| {
            args.get(1)
                .copied()
                .ok_or_else(|| format!("usage: {usage}"))
        };

        match args[0] {
            "ls" => Ok(Self::List(args.get(1).copied().unwrap_or("/"))),
            "cat" => path("cat <path>").map(Self::Cat),
            "touch" => path("touch <path>").map(Self::Touch),
            "mkdir" => path("mkdir <path>").map(Self::Mkdir),
            "edit" => path("edit <path>").map(Self::Edit),
            "rm" => path("rm <path>").map(Self::Remove),
            "help" => Ok(Self::Help),
            "exit" => Ok(Self::Exit),
            cmd => Err(format!("unknown command: {cmd}")),
        }
    }
}

pub fn run<D: BlockDevice>(
    fs: &mut MyFileSystem<D>,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    writeln!(output, "Welcome to {FS_NAME}")?;
    writeln!(output, "To get help, please type 'help' on the prompt below.")?;
    writeln!(output)?;

    let mut line = String::new();
    loop {
        write!(output, "{LINE_START}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF
            writeln!(output)?;
            return Ok(());
        }

        let args: Vec<&str> = line.split_whitespace().collect();
        if args.is_empty() {
            continue;
        }

        let command = match Command::parse(&args) {
            Ok(command) => command,
            Err(msg) => {
                writeln!(output, "{msg}")?;
                continue;
            }
        };
        log::debug!("command: {command:?}");

        match execute(command, fs, &mut input, &mut output) {
            Ok(ControlFlow::Continue(())) => {}
            Ok(ControlFlow::Break(())) => return Ok(()),
            Err(ShellError::Fs(e)) => writeln!(output, "{e}")?,
            Err(ShellError::Io(e)) => return Err(e),
        }
    }
}

fn execute<D: BlockDevice>(
    command: Command<'_>,
    fs: &mut MyFileSystem<D>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<ControlFlow<()>, ShellError> {
    match command {
        Command::List(path) => {
            for entry in fs.list_dir(path)? {
                writeln!(output, "{} {}", entry.name(), entry.inode_number())?;
            }
        }
        Command::Cat(path) => writeln!(output, "{}", fs.get_content(path)?)?,
        Command::Touch(path) => {
            fs.create(path, false)?;
        }
        Command::Mkdir(path) => {
            fs.create(path, true)?;
        }
        Command::Edit(path) => {
            writeln!(output, "Enter new file content")?;
            output.flush()?;
            let mut content = String::new();
            if input.read_line(&mut content)? == 0 {
                // EOF：不改动文件，直接结束
                writeln!(output)?;
                return Ok(ControlFlow::Break(()));
            }
            let content = content.trim_end_matches(['\n', '\r']);
            fs.set_content(path, content)?;
        }
        Command::Remove(path) => fs.remove(path)?,
        Command::Help => write!(output, "{HELP}")?,
        Command::Exit => return Ok(ControlFlow::Break(())),
    }

    Ok(ControlFlow::Continue(()))
}
