fn main() {
    let config = gf2m_config::Gf2mConfig::example();
    println!("{}", toml::to_string(&config).unwrap());
}
