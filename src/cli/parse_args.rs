use std::str::FromStr;

use credence::config::{Config, RemainderStrategy, TieRule};

/// Parse CLI arguments to a [Config] struct.
///
/// If an unrecognised argument or invalid option is found a message is sent and the process is terminated.
pub fn parse_args(args: &[String], config: &mut Config) {
    'arg_examination: for arg in args.iter().skip(1) {
        let mut split = arg.split('=');
        match split.next() {
            Some("--help") => {
                println!("An interactive shell over a weighted propositional belief base.");
                println!();
                println!("Options:");
                println!("  --strategy=<single-drop|exact>   Remainder generation strategy.");
                println!("  --ties=<union|intersection>      Rule for combining tied remainders.");
                println!("  --pass_limit=<n>                 Bound on resolution merge passes.");
                println!("  --subset_limit=<n>               Bound on exact remainder candidates.");
                std::process::exit(0);
            }

            // The remaining cases follow a common template.
            // If a value is present, may be parsed appropriately, and is valid, the config is updated.
            // Otherwise, a message is sent.
            //
            // Further, the cases should be in lexicographic order.
            //
            Some("--pass_limit") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        println!("pass_limit set to: {value}");
                        config.resolution_pass_limit = Some(value);
                        continue 'arg_examination;
                    }
                }

                println!("pass_limit requires a count of passes");
                std::process::exit(1);
            }

            Some("--strategy") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = RemainderStrategy::from_str(request) {
                        println!("strategy set to: {value}");
                        config.remainder_strategy = value;
                        continue 'arg_examination;
                    }
                }

                println!(
                    "strategy requires one of: {}, {}",
                    RemainderStrategy::SingleDrop,
                    RemainderStrategy::Exact
                );
                std::process::exit(1);
            }

            Some("--subset_limit") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        println!("subset_limit set to: {value}");
                        config.remainder_subset_limit = Some(value);
                        continue 'arg_examination;
                    }
                }

                println!("subset_limit requires a count of subsets");
                std::process::exit(1);
            }

            Some("--ties") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = TieRule::from_str(request) {
                        println!("ties set to: {value}");
                        config.tie_rule = value;
                        continue 'arg_examination;
                    }
                }

                println!("ties requires one of: {}, {}", TieRule::Union, TieRule::Intersection);
                std::process::exit(1);
            }

            Some(_) | None => {
                println!("Unable to parse argument: {arg:?}");
                std::process::exit(1);
            }
        }
    }
}
