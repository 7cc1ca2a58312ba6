use std::process::Command;

const CLI_REFERENCE_PATH: &str = "doc/cli_reference.md";

pub fn gen_cli_doc() -> anyhow::Result<()> {
    let cargo = std::env::var("CARGO")?;
    let output = Command::new(cargo)
        .arg("run")
        .arg("--features=bin")
        .arg("--")
        .arg("dump-help")
        .stderr(std::process::Stdio::inherit())
        .output()?;

    if !output.status.success() {
        anyhow::bail!("command failure {:?}", output.status.code())
    }

    let text = String::from_utf8(output.stdout)?;
    let text = text.replace("{title}", "Yui CLI Reference");

    let text = "<!-- This file was automatically generated using `cargo xtask gen-cli-doc`. \
        Do not manually edit this file! -->\n\n"
        .to_owned()
        + &text;

    std::fs::create_dir_all("doc")?;
    std::fs::write(CLI_REFERENCE_PATH, text.as_bytes())?;

    Ok(())
}
