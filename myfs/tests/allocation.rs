mod common;

use myfs::{Error, MAX_INODES, NAME_CAP};

#[test]
fn sequential_inode_numbers() {
    let mut fs = common::fresh();
    assert_eq!(fs.next_inode(), Ok(1));

    for k in 1..=10 {
        let live = fs.next_inode().unwrap();
        let inode = fs.create(&format!("/file{k}"), false).unwrap();
        assert_eq!(inode, live);
        assert_eq!(inode, k);
        assert_eq!(fs.find_entry(&format!("/file{k}")).unwrap().inode_number(), k);
    }
    assert_eq!(fs.next_inode(), Ok(11));
}

#[test]
fn duplicate_names_shadow() {
    let mut fs = common::fresh();
    assert_eq!(fs.create("/dup", false), Ok(1));
    assert_eq!(fs.create("/dup", true), Ok(2));

    // 先建的项先被找到，后建的项不可达
    let entry = fs.find_entry("/dup").unwrap();
    assert_eq!(entry.inode_number(), 1);
    assert!(!entry.is_dir());
    fs.set_content("/dup", "first").unwrap();
    assert_eq!(fs.get_content("/dup").unwrap(), "first");
    assert_eq!(fs.next_inode(), Ok(3));
}

#[test]
fn names_are_truncated() {
    let mut fs = common::fresh();
    let long = "/0123456789abcdefghijklmnopqrstuvwxyz";
    fs.create(long, false).unwrap();

    assert_eq!(fs.find_entry(long).err(), Some(Error::NotFound));
    let truncated = &long[..NAME_CAP];
    assert_eq!(fs.find_entry(truncated).unwrap().inode_number(), 1);
}

#[test]
fn no_parent_validation() {
    let mut fs = common::fresh();
    assert_eq!(fs.create("/no/such/parent", false), Ok(1));
    assert_eq!(fs.create("relative", false), Ok(2));
    assert!(fs.find_entry("/no/such/parent").is_ok());
}

#[test]
fn empty_name_reads_as_unused() {
    let mut fs = common::fresh();
    assert_eq!(fs.create("", false), Ok(1));
    // 空名字的项不被计数，下一次创建会覆盖它
    assert_eq!(fs.next_inode(), Ok(1));
    assert_eq!(fs.create("/x", false), Ok(1));
}

#[test]
fn volume_fills_up() {
    let mut fs = common::fresh();
    for i in 1..MAX_INODES as u32 {
        assert_eq!(fs.create(&format!("/{i}"), false), Ok(i));
    }
    assert_eq!(fs.next_inode(), Ok(MAX_INODES as u32));
    assert_eq!(
        fs.create("/one-too-many", false),
        Err(Error::InodeOutOfRange(MAX_INODES as u32))
    );
    assert_eq!(fs.find_entry("/31").unwrap().inode_number(), 31);
}

#[test]
fn remove_is_not_implemented() {
    let mut fs = common::fresh();
    fs.create("/a", false).unwrap();
    assert_eq!(fs.remove("/a"), Err(Error::NotImplemented));
    assert!(fs.find_entry("/a").is_ok());
}
