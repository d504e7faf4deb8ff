use anyhow::{Result, bail};
use std::process::{Command, Output};

fn gen_runtime_constants() -> Command {
    let _ = env_logger::try_init();
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gen-runtime-constants"));
    cmd.env_remove(gen_runtime_constants::LOG_ENV);
    cmd
}

fn run(args: &[&str]) -> Result<String> {
    let output = gen_runtime_constants().args(args).output()?;
    if !output.status.success() {
        bail!(
            "Failed to execute gen-runtime-constants with: {:?}\n{}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(String::from_utf8(output.stdout)?)
}

fn lines(stdout: &str) -> Vec<&str> {
    stdout.lines().collect()
}

#[test]
fn prints_declaration_block() -> Result<()> {
    let stdout = run(&[])?;
    let lines = lines(&stdout);
    assert_eq!(lines[0], "structure RuntimeConstants : RUNTIME_CONSTS =");
    assert_eq!(lines[1], "  struct");
    assert_eq!(lines.last(), Some(&"  end (* RuntimeConstants *)"));
    assert!(stdout.ends_with('\n'));

    let comments: Vec<_> = lines
        .iter()
        .filter(|l| l.starts_with("  (* "))
        .copied()
        .collect();
    assert_eq!(
        comments,
        [
            "  (* word size and alignment *)",
            "  (* stack size and heap size info *)",
            "  (* offsets into the VProc structure *)",
            "  (* mask to get address of VProc from alloc pointer *)",
        ]
    );
    Ok(())
}

#[test]
fn word_sizes() -> Result<()> {
    let stdout = run(&[])?;
    let word = std::mem::size_of::<usize>();
    assert!(stdout.contains(&format!("\n    val wordSzB = 0w{word}\n")));
    assert!(stdout.contains(&format!("\n    val wordAlignB = 0w{word}\n")));
    assert!(stdout.contains(&format!("\n    val boolSzB = 0w{word}\n")));
    assert!(stdout.contains(&format!(
        "\n    val extendedAlignB = 0w{}\n",
        std::mem::align_of::<f64>()
    )));
    assert!(stdout.contains(&format!(
        "\n    val spillAreaSzB = 0w{}\n",
        manticore_vproc::FRAME_SZB
    )));
    if cfg!(target_pointer_width = "64") {
        assert!(stdout.contains("\n    val maxObjectSzB = 0w488\n"));
    }
    Ok(())
}

#[test]
fn offsets_follow_the_vproc() -> Result<()> {
    use core::mem::offset_of;
    use manticore_vproc::VProc;

    let stdout = run(&[])?;
    let expected = [
        ("inManticore", offset_of!(VProc, in_manticore)),
        ("atomic", offset_of!(VProc, atomic)),
        ("sigPending", offset_of!(VProc, sig_pending)),
        ("allocPtr", offset_of!(VProc, alloc_ptr)),
        ("limitPtr", offset_of!(VProc, limit_ptr)),
        ("stdArg", offset_of!(VProc, std_arg)),
        ("stdPtr", offset_of!(VProc, std_env_ptr)),
        ("stdCont", offset_of!(VProc, std_cont)),
        ("stdExnCont", offset_of!(VProc, std_exn_cont)),
        ("actionStk", offset_of!(VProc, action_stk)),
    ];
    let offsets: Vec<_> = lines(&stdout)
        .into_iter()
        .filter(|l| l.contains(" : IntInf.int = ") && !l.contains("vpMask"))
        .map(str::to_string)
        .collect();
    let expected: Vec<_> = expected
        .iter()
        .map(|(name, offset)| format!("    val {name} : IntInf.int = {offset}"))
        .collect();
    assert_eq!(offsets, expected);
    Ok(())
}

#[test]
fn heap_mask_is_hex() -> Result<()> {
    let stdout = run(&[])?;
    let mask = !(manticore_vproc::VP_HEAP_SZB - 1);
    assert!(stdout.contains(&format!("\n    val vpMask : IntInf.int = {mask:#x}\n")));
    if cfg!(target_pointer_width = "64") {
        assert!(stdout.contains("\n    val vpMask : IntInf.int = 0xfffffffffff00000\n"));
    }
    Ok(())
}

#[test]
fn output_is_deterministic() -> Result<()> {
    assert_eq!(run(&[])?, run(&[])?);
    Ok(())
}

#[test]
fn logging_stays_off_stdout() -> Result<()> {
    let Output { status, stdout, stderr } = gen_runtime_constants()
        .env(gen_runtime_constants::LOG_ENV, "trace")
        .output()?;
    assert!(status.success());
    assert_eq!(String::from_utf8(stdout)?, run(&[])?);
    let stderr = String::from_utf8_lossy(&stderr);
    assert!(stderr.contains("extracting runtime layout"), "{stderr}");
    Ok(())
}

#[test]
fn writes_output_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("runtime-constants.sml");
    let stdout = run(&["--output", path.to_str().unwrap()])?;
    assert!(stdout.is_empty());
    assert_eq!(std::fs::read_to_string(&path)?, run(&[])?);
    Ok(())
}

#[test]
fn unwritable_output_fails() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("missing").join("runtime-constants.sml");
    let output = gen_runtime_constants()
        .args(["-o", path.to_str().unwrap()])
        .output()?;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to write"), "{stderr}");
    Ok(())
}

#[test]
fn rejects_unknown_arguments() -> Result<()> {
    assert!(run(&["--target", "x86_64-unknown-linux-gnu"]).is_err());
    Ok(())
}
