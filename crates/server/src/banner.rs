pub fn print_banner(version: &str) {
    let banner = format!(
        r#"
  ██████╗██╗   ██╗███████╗████████╗
 ██╔════╝██║   ██║██╔════╝╚══██╔══╝
 ██║     ██║   ██║███████╗   ██║       customer-api
 ██║     ██║   ██║╚════██║   ██║       v{}
 ╚██████╗╚██████╔╝███████║   ██║
  ╚═════╝ ╚═════╝ ╚══════╝   ╚═╝
"#,
        version
    );

    tracing::info!("{}", banner);
}
