use reo_core::eggs;
use reo_core::{
    CustomDefinitions, Dispatch, Lookup, LookupError, LookupResult, MarkupDialect, Palette, Tools,
};

/// What a sanitized term turned into
#[derive(Debug)]
pub enum Resolution {
    Show {
        result: LookupResult,
        /// Whether offering speech playback makes sense for this result
        speakable: bool,
    },
    Exit,
}

/// Resolve a sanitized, non-empty term.
///
/// Blocks on the external tools, run it off the async workers.
pub fn resolve(
    term: &str,
    tools: Tools,
    custom: Option<&CustomDefinitions>,
    palette: &Palette,
    dialect: MarkupDialect,
) -> Result<Resolution, LookupError> {
    match Dispatch::classify(term) {
        Dispatch::Exit => Ok(Resolution::Exit),
        Dispatch::Egg(egg) => {
            tracing::debug!("Easter egg: {:?}", egg);
            Ok(Resolution::Show {
                result: egg.resolve(&tools, palette, dialect),
                speakable: !eggs::always_reruns(term),
            })
        }
        Dispatch::Lookup(term) => {
            if let Some(custom) = custom {
                match custom.load(&term) {
                    Ok(Some(definition)) => {
                        return Ok(Resolution::Show {
                            result: definition.into_result(&term, dialect),
                            speakable: true,
                        });
                    }
                    Ok(None) => {}
                    Err(e) => tracing::warn!("Ignoring custom definition for '{}': {}", term, e),
                }
            }

            let result = Lookup::new(tools).lookup(&term, palette, dialect)?;
            Ok(Resolution::Show {
                result,
                speakable: true,
            })
        }
    }
}
