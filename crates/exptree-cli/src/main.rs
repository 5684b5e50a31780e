use clap::{ArgAction, Parser, Subcommand};
use exptree_lexer::Alphabet;
use exptree_parser::{ExpressionTree, ParserConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_HEIGHT};
use exptree_traverse::Order;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

#[derive(Parser)]
#[command(name = "exptree")]
#[command(about = "Build binary expression trees from arithmetic expressions")]
#[command(version)]
struct Cli {
    /// Characters allowed in operands: digits or alphanumeric
    #[arg(long, global = true, default_value_t = Alphabet::Alphanumeric)]
    alphabet: Alphabet,

    /// Maximum parenthesis nesting depth
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Maximum tree height; long operator chains add one level per operator
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_HEIGHT)]
    max_height: usize,

    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    debug: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check an expression for errors without printing the tree
    Check {
        /// Arithmetic expression, e.g. "(2+3)*4"
        expression: String,
    },

    /// Print the parsed tree
    Tree {
        /// Arithmetic expression
        expression: String,

        /// Print the tree as JSON instead of infix form
        #[arg(long)]
        json: bool,
    },

    /// Print the node labels in traversal order
    Traverse {
        /// Arithmetic expression
        expression: String,

        /// preorder (L, node, R), inorder (L, R, node) or postorder (node, L, R)
        #[arg(short, long, default_value_t = Order::Inorder)]
        order: Order,

        /// Print all three orders
        #[arg(long, conflicts_with = "order")]
        all: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let config = ParserConfig::default()
        .with_alphabet(cli.alphabet)
        .with_max_depth(cli.max_depth)
        .with_max_height(cli.max_height);
    debug!(
        alphabet = %config.alphabet,
        max_depth = config.max_depth,
        max_height = config.max_height,
        "parser config"
    );

    match cli.command {
        Command::Check { expression } => cmd_check(&expression, config),
        Command::Tree { expression, json } => cmd_tree(&expression, config, json),
        Command::Traverse {
            expression,
            order,
            all,
        } => cmd_traverse(&expression, config, order, all),
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
}

/// Run the input gate and the parser, exiting with status 1 on failure.
fn build_tree(expression: &str, config: ParserConfig) -> ExpressionTree {
    match try_build_tree(expression, config) {
        Ok(tree) => tree,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}

fn try_build_tree(expression: &str, config: ParserConfig) -> Result<ExpressionTree, String> {
    exptree_lexer::validate(expression, config.alphabet).map_err(|e| e.to_string())?;
    debug!(expression, "input accepted by gate");

    let tree = exptree_parser::Parser::new(config)
        .parse(expression)
        .map_err(|e| format!("Parse error: {e}"))?;
    debug!(nodes = tree.node_count(), depth = tree.depth(), "parsed");
    Ok(tree)
}

/// Infix form followed by the node count and height.
fn render_tree(tree: &ExpressionTree) -> String {
    format!(
        "{tree}\nnodes: {}, depth: {}",
        tree.node_count(),
        tree.depth()
    )
}

fn cmd_check(expression: &str, config: ParserConfig) {
    build_tree(expression, config);
    println!("OK");
}

fn cmd_tree(expression: &str, config: ParserConfig, json: bool) {
    let tree = build_tree(expression, config);

    if json {
        match serde_json::to_string_pretty(&tree) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error serializing tree: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("{}", render_tree(&tree));
}

fn cmd_traverse(expression: &str, config: ParserConfig, order: Order, all: bool) {
    let tree = build_tree(expression, config);
    let orders = if all { Order::ALL.to_vec() } else { vec![order] };

    for order in orders {
        let labels = exptree_traverse::traverse(&tree, order);
        println!("Traversal ({order}): {}", labels.join(" "));
    }
}
