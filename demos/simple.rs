use formula_rs::formula::Formula;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut formula = Formula::new();
    println!("formula = {:?}", formula);

    formula.build("(A>B)")?;
    println!("formula = {}", formula);

    let root = formula.root().unwrap();
    println!("prefix = {}", formula.to_prefix(root));
    println!("postfix = {}", formula.to_postfix(root));

    let table = formula.truth_table();
    println!("rows = {}", table.num_rows());
    println!("answers = {:?}", table.answers());

    println!("conjunctive numeric = {:?}", formula.full_conjunctive_numeric_form());
    println!("disjunctive numeric = {:?}", formula.full_disjunctive_numeric_form());
    println!("cnf = {:?}", formula.full_conjunctive_normal_form());
    println!("dnf = {:?}", formula.full_disjunctive_normal_form());
    println!("index = {}", formula.index_form());

    Ok(())
}
