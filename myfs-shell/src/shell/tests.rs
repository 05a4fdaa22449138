use std::io::Cursor;

use block_dev::RamDisk;
use myfs::{ListMode, MIN_DEVICE_SIZE, MyFileSystem};

use super::{Command, run};

fn session(fs: &mut MyFileSystem<RamDisk>, script: &str) -> String {
    let mut output = Vec::new();
    run(fs, Cursor::new(script.as_bytes()), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

fn fresh() -> MyFileSystem<RamDisk> {
    MyFileSystem::open(RamDisk::new(MIN_DEVICE_SIZE)).unwrap()
}

#[test]
fn parse_commands() {
    assert_eq!(Command::parse(&["ls"]), Ok(Command::List("/")));
    assert_eq!(Command::parse(&["ls", "/docs"]), Ok(Command::List("/docs")));
    assert_eq!(Command::parse(&["cat", "/a"]), Ok(Command::Cat("/a")));
    assert_eq!(Command::parse(&["rm", "/a"]), Ok(Command::Remove("/a")));
    assert_eq!(Command::parse(&["exit"]), Ok(Command::Exit));
    assert_eq!(
        Command::parse(&["touch"]),
        Err("usage: touch <path>".to_owned())
    );
    assert_eq!(
        Command::parse(&["frob"]),
        Err("unknown command: frob".to_owned())
    );
}

#[test]
fn edit_then_cat() {
    let mut fs = fresh();
    let out = session(&mut fs, "touch /a.txt\nedit /a.txt\nhello there\ncat /a.txt\nexit\n");

    assert!(out.starts_with("Welcome to myfs\n"));
    assert!(out.contains("Enter new file content\n"));
    assert!(out.contains("myfs$ hello there\n"));
    assert_eq!(fs.get_content("/a.txt").unwrap(), "hello there");
}

#[test]
fn errors_do_not_stop_the_loop() {
    let mut fs = fresh();
    let out = session(
        &mut fs,
        "cat /missing\nmkdir /d\ncat /d\nrm /d\nfrob\ntouch\ntouch /after\nexit\n",
    );

    assert!(out.contains("File not found\n"));
    assert!(out.contains("Path is a directory, not a file\n"));
    assert!(out.contains("not implemented\n"));
    assert!(out.contains("unknown command: frob\n"));
    assert!(out.contains("usage: touch <path>\n"));
    assert!(fs.find_entry("/after").is_ok());
}

#[test]
fn ls_prints_names_and_inodes() {
    let mut fs = fresh();
    let out = session(&mut fs, "touch /a\nmkdir /d\nls\n");
    assert!(out.contains("/ 0\n/a 1\n/d 2\n"));
}

#[test]
fn filtered_ls() {
    let mut fs = fresh().with_list_mode(ListMode::Filtered);
    let out = session(&mut fs, "mkdir /d\ntouch /d/x\ntouch /y\nls /d\n");
    assert!(out.contains("myfs$ /d/x 2\n"));
    assert!(!out.contains("/y 3"));
}

#[test]
fn blank_lines_help_and_eof() {
    let mut fs = fresh();
    let out = session(&mut fs, "\n   \nhelp\n");
    assert!(out.contains("ls [<directory>] - list directory content.\n"));
    assert!(out.ends_with("myfs$ \n"));
}

#[test]
fn eof_at_edit_prompt_keeps_content() {
    let mut fs = fresh();
    session(&mut fs, "touch /a\nedit /a\nkeep me\n");
    assert_eq!(fs.get_content("/a").unwrap(), "keep me");

    let out = session(&mut fs, "edit /a\n");
    assert!(out.ends_with("Enter new file content\n\n"));
    assert_eq!(fs.get_content("/a").unwrap(), "keep me");
}
