use super::{CategoryConfig, CategoryDefinition};

pub(super) fn default_categories() -> CategoryConfig {
    CategoryConfig {
        categories: vec![
            // Checked first so shots/hits/stabs win over the instrument they name.
            CategoryDefinition::new("oneshots", 1, &["oneshot", "one-shot", "hit", "stab", "shot"])
                .with_subcategory(
                    "bass",
                    &["bass shot", "bass_shot", "bass stab", "bass_stab", "bass hit", "bass_hit", "bassshot"],
                )
                .with_subcategory(
                    "synth",
                    &["synth shot", "synth_shot", "synth stab", "synth_stab", "synthshot"],
                )
                .with_subcategory("vocal", &["vocal shot", "vocal_shot"])
                .with_subcategory("drum", &["drum hit", "drum_hit", "drum stab", "drum_stab"])
                .with_subcategory("melodic", &["melodic stab", "melodic_stab"])
                .with_subcategory(
                    "general",
                    &["oneshot", "one-shot", "one_shot", "hit", "stab", "shot"],
                ),
            CategoryDefinition::new(
                "drums",
                2,
                &[
                    "kick", "snare", "hihat", "hi-hat", "hi_hat", "hi hat", "hats", "clap", "tom",
                    "cymbal", "crash", "ride", "drum", "bd", "sd", "hh", "closed hat", "open hat",
                    "hat closed", "hat open", "sidestick", "side stick", "rimshot", "rim shot",
                    "cup", "rim", "cym", "china", "crossstick", "cross stick",
                ],
            )
            .with_subcategory("kick", &["kick", "bd"])
            .with_subcategory("snare", &["snare", "sd"])
            .with_subcategory(
                "hihat",
                &[
                    "hihat", "hi-hat", "hi_hat", "hi hat", "hh", "hats", "closed hat", "open hat",
                    "hat closed", "hat open",
                ],
            )
            .with_subcategory("clap", &["clap"])
            .with_subcategory("tom", &["tom", "toms"])
            .with_subcategory("cymbal", &["cymbal", "crash", "ride", "cup", "cym", "china"])
            .with_subcategory(
                "rimshot",
                &[
                    "sidestick", "side stick", "rimshot", "rim shot", "crossstick", "cross stick",
                    "rim",
                ],
            )
            .with_subcategory("fill", &["drum fill", "drum_fill"])
            .with_subcategory("loop", &["drum loop", "drum_loop", "beat loop", "beat_loop"])
            .with_subcategory(
                "ethnic",
                &[
                    "ethnic drum", "ethnic_drum", "indian drum", "indian_drum", "tribal drum",
                    "tribal_drum",
                ],
            )
            .with_subcategory("acoustic", &["acoustic drum", "acoustic_drum"])
            .with_subcategory("cinematic", &["cinematic drum", "cinematic_drum", "cinematic"]),
            CategoryDefinition::new("bass", 3, &["bass", "sub", "808", "909"])
                .with_subcategory("sub", &["sub", "subbass", "sub-bass", "sub_bass"])
                .with_subcategory("808", &["808"])
                .with_subcategory("909", &["909"])
                .with_subcategory("growl", &["growl", "wobble", "whomp", "freak"])
                .with_subcategory("loop", &["bass loop", "bass_loop", "bassloop"])
                .with_subcategory("psy", &["psy", "psy bass", "psy_bass", "psybass"])
                .with_subcategory(
                    "pluck",
                    &[
                        "bass pluck", "bass_pluck", "pluck bass", "pluck_bass", "plucked bass",
                        "plucked_bass",
                    ],
                ),
            CategoryDefinition::new(
                "percussion",
                4,
                &[
                    "perc", "percussion", "shaker", "conga", "bongo", "tambourine", "tamb",
                    "cowbell", "cabasa", "clave", "claves", "agogo", "timbale", "timpani",
                    "maracas", "maraca", "woodblock", "wood block", "triangle", "guiro", "djembe",
                    "udu", "brush", "chk", "cowb",
                ],
            )
            .with_subcategory("shaker", &["shaker", "shake"])
            .with_subcategory("conga", &["conga", "congas"])
            .with_subcategory("bongo", &["bongo"])
            .with_subcategory("tambourine", &["tambourine", "tamb"])
            .with_subcategory("cowbell", &["cowbell", "cow bell", "cowb"])
            .with_subcategory("cabasa", &["cabasa"])
            .with_subcategory("clave", &["clave", "claves"])
            .with_subcategory("agogo", &["agogo"])
            .with_subcategory("timbale", &["timbale"])
            .with_subcategory("timpani", &["timpani"])
            .with_subcategory("maracas", &["maracas", "maraca"])
            .with_subcategory("woodblock", &["woodblock", "wood block"])
            .with_subcategory("triangle", &["triangle"])
            .with_subcategory("guiro", &["guiro"])
            .with_subcategory("djembe", &["djembe"])
            .with_subcategory("udu", &["udu"])
            .with_subcategory("brush", &["brush"])
            .with_subcategory("miscellaneous", &["chk"])
            .with_subcategory(
                "high",
                &[
                    "hi perc", "hi_perc", "high perc", "high_perc", "high percussion",
                    "high_percussion", "percussion high", "percussion_high",
                ],
            )
            .with_subcategory(
                "low",
                &[
                    "low perc", "low_perc", "low percussion", "low_percussion", "percussion low",
                    "percussion_low",
                ],
            )
            .with_subcategory(
                "mid",
                &[
                    "mid perc", "mid_perc", "mid percussion", "mid_percussion", "percussion mid",
                    "percussion_mid",
                ],
            )
            .with_subcategory(
                "loop",
                &["percussion loop", "percussion_loop", "perc loop", "perc_loop"],
            )
            .with_subcategory("rimshot", &["rimshot", "rim shot", "rim_shot", "rim"])
            .with_subcategory("clank", &["clank", "metal perc", "metal_perc", "metallic"])
            .with_subcategory(
                "wood",
                &["wooden", "wood perc", "wood_perc", "wooden perc", "wooden_perc"],
            )
            .with_subcategory("slap", &["slap", "percussion slap", "percussion_slap"])
            .with_subcategory("knock", &["knock", "percussion knock", "percussion_knock"])
            .with_subcategory("beatbox", &["beatbox", "beat box", "beat_box"])
            .with_subcategory(
                "ethnic",
                &[
                    "ethnic perc", "ethnic_perc", "tribal perc", "tribal_perc", "african perc",
                    "african_perc", "indian perc", "indian_perc",
                ],
            ),
            CategoryDefinition::new(
                "vocals",
                5,
                &["vocal", "vox", "voice", "acapella", "choir", "shout", "chant", "adlib"],
            )
            .with_subcategory("vocal", &["vocal"])
            .with_subcategory("vox", &["vox"])
            .with_subcategory("voice", &["voice"])
            .with_subcategory("acapella", &["acapella"])
            .with_subcategory("choir", &["choir", "chorus", "ensemble"])
            .with_subcategory("shout", &["shout", "yell", "scream"])
            .with_subcategory("chant", &["chant", "chanting"])
            .with_subcategory("adlib", &["adlib", "ad-lib", "ad lib"]),
            CategoryDefinition::new(
                "synth",
                6,
                &["synth", "lead", "pad", "pluck", "saw", "square", "sine"],
            )
            .with_subcategory("lead", &["lead", "leads", "synth lead", "synth_lead"])
            .with_subcategory("pad", &["pad", "pads", "synth pad", "synth_pad"])
            .with_subcategory(
                "pluck",
                &["pluck", "plucks", "plucked", "synth pluck", "synth_pluck"],
            )
            .with_subcategory("saw", &["saw", "sawtooth"])
            .with_subcategory("square", &["square"])
            .with_subcategory("sine", &["sine"])
            .with_subcategory("loop", &["synth loop", "synth_loop", "synthloop"])
            .with_subcategory("reverse", &["reverse synth", "reverse_synth", "reversed"])
            .with_subcategory("fill", &["synth fill", "synth_fill", "synthfill"])
            .with_subcategory("arp", &["arp", "arpeggio", "arpeggiated"])
            .with_subcategory("blip", &["blip", "beep", "bleep"]),
            CategoryDefinition::new(
                "melodic",
                7,
                &[
                    "piano", "guitar", "bell", "marimba", "xylophone", "harp", "strings", "violin",
                    "cello", "flute", "horn", "trumpet", "sax", "saxophone", "organ", "keys",
                    "brass", "woodwind", "arpeggio", "arpeggiated", "melody", "oud", "bouzouki",
                    "duduk", "glissentar", "joombush", "mandolin", "mandolino", "wurli",
                    "wurlitzer", "clav", "clavinet", "accordion", "chime", "chimes",
                ],
            )
            .with_subcategory("piano", &["piano"])
            .with_subcategory(
                "guitar",
                &["guitar", "gtr", "acoustic guitar", "electric guitar"],
            )
            .with_subcategory("bell", &["bell", "chime", "chimes"])
            .with_subcategory("marimba", &["marimba"])
            .with_subcategory("xylophone", &["xylophone"])
            .with_subcategory("harp", &["harp"])
            .with_subcategory("strings", &["strings", "string", "violin", "cello", "viola"])
            .with_subcategory(
                "woodwind",
                &["flute", "clarinet", "oboe", "sax", "saxophone", "woodwind"],
            )
            .with_subcategory("brass", &["horn", "trumpet", "trombone", "brass"])
            .with_subcategory(
                "keys",
                &["organ", "keys", "keyboard", "wurli", "wurlitzer", "clav", "clavinet"],
            )
            .with_subcategory("oud", &["oud"])
            .with_subcategory("bouzouki", &["bouzouki"])
            .with_subcategory("duduk", &["duduk"])
            .with_subcategory("glissentar", &["glissentar"])
            .with_subcategory("joombush", &["joombush"])
            .with_subcategory("mandolin", &["mandolin", "mandolino"])
            .with_subcategory("accordion", &["accordion"]),
            CategoryDefinition::new(
                "fx",
                8,
                &[
                    "fx", "sfx", "riser", "downsweep", "whoosh", "impact", "sweep", "noise",
                    "white", "reverse", "rev", "glitch", "tone", "envelope", "pulse", "ufo",
                    "bleeps", "sync", "click",
                ],
            )
            .with_subcategory("riser", &["riser", "uplift", "risefx"])
            .with_subcategory("downsweep", &["downsweep"])
            .with_subcategory("whoosh", &["whoosh"])
            .with_subcategory("impact", &["impact", "boom", "slam"])
            .with_subcategory("sweep", &["sweep", "uplifter"])
            .with_subcategory("noise", &["noise", "white", "white noise", "pink noise"])
            .with_subcategory("reverse", &["reverse", "rev"])
            .with_subcategory("game", &["game", "video game"])
            .with_subcategory("psy", &["psy", "psychedelic"])
            .with_subcategory("transformer", &["transformer", "robot"])
            .with_subcategory("laser", &["laser", "lazer"])
            .with_subcategory("water", &["water", "splash", "ocean"])
            .with_subcategory("glitch", &["glitch"])
            .with_subcategory("tone", &["tone"])
            .with_subcategory("envelope", &["envelope"])
            .with_subcategory("pulse", &["pulse"])
            .with_subcategory("ufo", &["ufo"])
            .with_subcategory("blip", &["bleeps"])
            .with_subcategory("sync", &["sync"])
            .with_subcategory("click", &["click"]),
            CategoryDefinition::new(
                "transition",
                9,
                &[
                    "fill", "transition", "build", "buildup", "build-up", "breakdown",
                    "break-down", "downlifter", "stop",
                ],
            )
            .with_subcategory("fill", &["fill"])
            .with_subcategory("transition", &["transition"])
            .with_subcategory("buildup", &["build", "buildup", "build-up"])
            .with_subcategory("breakdown", &["breakdown", "break-down"])
            .with_subcategory("downlifter", &["downlifter"])
            .with_subcategory("stop", &["stop"]),
            CategoryDefinition::new(
                "ambiance",
                10,
                &["ambiance", "ambient", "atmosphere", "drone", "texture", "atmospheric"],
            )
            .with_subcategory("dark", &["dark"])
            .with_subcategory("bright", &["bright"])
            .with_subcategory("space", &["space"])
            .with_subcategory("nature", &["nature"])
            .with_subcategory("industrial", &["industrial"]),
            CategoryDefinition::new(
                "foley",
                11,
                &[
                    "foley", "bird", "animal", "water", "splash", "scratch", "vinyl", "snap",
                    "whistle", "ocean", "nature", "wind",
                ],
            )
            .with_subcategory("nature", &["bird", "wind"])
            .with_subcategory("animal", &["animal"])
            .with_subcategory("water", &["water", "splash", "ocean"])
            .with_subcategory("vinyl", &["scratch", "vinyl"])
            .with_subcategory("human", &["snap", "whistle"])
            .with_subcategory("mechanical", &["mechanical"]),
            CategoryDefinition::new("loops", 12, &["loop", "phrase", "bar", "beat"])
                .with_subcategory("loop", &["loop"])
                .with_subcategory("phrase", &["phrase"])
                .with_subcategory("bar", &["bar"])
                .with_subcategory("beat", &["beat"]),
        ],
    }
}
