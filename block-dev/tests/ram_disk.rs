use block_dev::{BlockDevice, DeviceError, RamDisk};

#[test]
fn rejects_out_of_range_access() {
    let disk = RamDisk::new(16);
    let mut buf = [0u8; 8];
    assert!(disk.read(8, &mut buf).is_ok());
    assert_eq!(
        disk.read(9, &mut buf),
        Err(DeviceError::OutOfBounds {
            offset: 9,
            len: 8,
            capacity: 16
        })
    );
    assert!(disk.write(usize::MAX, &buf).is_err());
}

#[test]
fn write_then_read() {
    let disk = RamDisk::new(16);
    disk.write(3, b"abc").unwrap();
    let mut buf = [0u8; 5];
    disk.read(2, &mut buf).unwrap();
    assert_eq!(&buf, b"\0abc\0");
    assert_eq!(disk.capacity(), 16);
    assert_eq!(&disk.snapshot()[3..6], b"abc");
}
