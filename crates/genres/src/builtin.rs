// Genre table for the collection. Ids are stable keys used in configuration; labels are
// the exact tag values written into the files.

pub(crate) const BUILTIN_GENRES: &[(&str, &str)] = &[
    ("AcidPunk", "Acid Punk"),
    ("AcidRock", "Acid Rock"),
    ("Afrobeat", "Afrobeat"),
    ("Afropop", "Afropop"),
    ("Alternative", "Alternative"),
    ("AlternativeMetal", "Alternative Metal"),
    ("AlternativeRock", "Alternative Rock"),
    ("Ambient", "Ambient"),
    ("ArtPunk", "Art Punk"),
    ("ArtRock", "Art Rock"),
    ("BigBand", "Big Band"),
    ("BlackMetal", "Black Metal"),
    ("Bluegrass", "Bluegrass"),
    ("Blues", "Blues"),
    ("Bollywood", "Bollywood"),
    ("BossaNova", "Bossa Nova"),
    ("Britpop", "Britpop"),
    ("Cajun", "Cajun"),
    ("Celtic", "Celtic"),
    ("CelticRock", "Celtic Rock"),
    ("Chillwave", "Chillwave"),
    ("Chinese", "Chinese"),
    ("Classical", "Classical"),
    ("ClassicCountry", "Classic Country"),
    ("ClassicPop", "Classic Pop"),
    ("ClassicProg", "Classic Prog"),
    ("ClassicRock", "Classic Rock"),
    ("Comedy", "Comedy"),
    ("Country", "Country"),
    ("CountryPop", "Country Pop"),
    ("Cumbia", "Cumbia"),
    ("Dabke", "Dabke"),
    ("DanceElectronic", "Dance/Electronic"),
    ("DeathMetal", "Death Metal"),
    ("DeepHouse", "Deep House"),
    ("DirtyBlues", "Dirty Blues"),
    ("Disco", "Disco"),
    ("DixielandJazz", "Dixieland Jazz"),
    ("DoomMetal", "Doom Metal"),
    ("DooWop", "Doo-wop"),
    ("Downtempo", "Downtempo"),
    ("DreamPop", "Dream Pop"),
    ("Drumline", "Drumline"),
    ("EasyListening", "Easy Listening"),
    ("Electronic", "Electronic"),
    ("Electronica", "Electronica"),
    ("ElectronicInstrumental", "Electronic (Instrumental)"),
    ("Electropop", "Electropop"),
    ("EmoPopRock", "Emo / Pop-Rock"),
    ("Eurodance", "Eurodance"),
    ("Experimental", "Experimental"),
    ("ExperimentalAmbientRock", "Experimental Ambient Rock"),
    ("Folk", "Folk"),
    ("FolkPop", "Folk Pop"),
    ("FolkPunk", "Folk Punk"),
    ("FolkRock", "Folk Rock"),
    ("FolkRockJazz", "Folk rock, Jazz"),
    ("FrenchHouse", "French House"),
    ("Funk", "Funk"),
    ("FunkInstrumental", "Funk (Instrumental)"),
    ("FunkMetal", "Funk Metal"),
    ("FunkRock", "Funk Rock"),
    ("FunkSoul", "Funk/Soul"),
    ("Funktronica", "Funktronica"),
    ("GlamMetal", "Glam Metal"),
    ("GlamRock", "Glam Rock"),
    ("Gospel", "Gospel"),
    ("GothRock", "Goth Rock"),
    ("Grindcore", "Grindcore"),
    ("Grunge", "Grunge"),
    ("HeavyMetal", "Heavy Metal"),
    ("HipHop", "Hip-Hop"),
    ("HipHopElectronic", "Hip-Hop/Electronic"),
    ("HipHopFrançais", "Hip-Hop français"),
    ("HipHopInstrumental", "Hip-Hop (Instrumental)"),
    ("HipHopReggae", "Hip-Hop/Reggae"),
    ("HonkyTonk", "Honky Tonk"),
    ("HorrorPunk", "Horror Punk"),
    ("House", "House"),
    ("IndieFolk", "Indie Folk"),
    ("IndiePop", "Indie Pop"),
    ("IndieRock", "Indie Rock"),
    ("Industrial", "Industrial"),
    ("IndustrialMetal", "Industrial Metal"),
    ("JapaneseRock", "Japanese Rock"),
    ("Jazz", "Jazz"),
    ("JazzFunk", "Jazz/Funk"),
    ("JazzPop", "Jazz Pop"),
    ("JazzRock", "Jazz Rock"),
    ("KoreanRock", "Korean Rock"),
    ("KPop", "K-Pop"),
    ("Latin", "Latin"),
    ("LatinFunk", "Latin Funk"),
    ("LatinPop", "Latin Pop"),
    ("Literature", "Literature"),
    ("Metalcore", "Metalcore"),
    ("Motown", "Motown"),
    ("NeoSoul", "Neo-Soul"),
    ("NewAge", "New Age"),
    ("NewDisco", "New Disco"),
    ("NewWave", "New Wave"),
    ("NewWaveFrançais", "New Wave français"),
    ("NoiseRock", "Noise Rock"),
    ("Norteño", "Norteño"),
    ("NuJazz", "Nu Jazz"),
    ("NuJazzInstrumental", "Nu Jazz (Instrumental)"),
    ("NuMetal", "Nu Metal"),
    ("NuMetalFrançais", "Nu Metal français"),
    ("Political", "Political"),
    ("Pop", "Pop"),
    ("PopFrançaise", "Pop française"),
    ("PopItaliano", "Pop italiano"),
    ("PopPunk", "Pop-Punk"),
    ("PopRock", "Pop Rock"),
    ("PostBlackMetal", "Post-Black Metal"),
    ("PostGrunge", "Post-Grunge"),
    ("PostHardcore", "Post-Hardcore"),
    ("PostIndustrial", "Post-Industrial"),
    ("PostMetal", "Post-Metal"),
    ("PostPunk", "Post-Punk"),
    ("PostRock", "Post-Rock"),
    ("PowerPop", "Power Pop"),
    ("ProgressiveMetal", "Progressive Metal"),
    ("ProgressivePop", "Progressive Pop"),
    ("ProgRock", "Prog Rock"),
    ("ProtoPunk", "Proto-Punk"),
    ("PsychedelicFolk", "Psychedelic Folk"),
    ("PsychedelicPop", "Psychedelic Pop"),
    ("PsychedelicRock", "Psychedelic Rock"),
    ("Punk", "Punk"),
    ("PunkFrançais", "Punk français"),
    ("PunkRock", "Punk Rock"),
    ("Reggae", "Reggae"),
    ("ReggaeRock", "Reggae Rock"),
    ("Reggaeton", "Reggaeton"),
    ("RnB", "R&B"),
    ("RnBFrançais", "RnB français"),
    ("RnBFunk", "R&B/Funk"),
    ("RnBInstrumental", "R&B (Instrumental)"),
    ("RnBSoul", "R&B/Soul"),
    ("Rockabilly", "Rockabilly"),
    ("RockBrasileiro", "Rock brasileiro"),
    ("RockEnEspañol", "Rock en español"),
    ("RockFrançais", "Rock français"),
    ("RockItaliano", "Rock italiano"),
    ("RussianFolk", "Russian Folk"),
    ("RussianPop", "Russian Pop"),
    ("Shoegaze", "Shoegaze"),
    ("SkaPunk", "Ska Punk"),
    ("SludgeMetal", "Sludge Metal"),
    ("SmoothJazz", "Smooth Jazz"),
    ("SoftRock", "Soft Rock"),
    ("SophistiPop", "Sophisti-pop"),
    ("Soundtrack", "Soundtrack"),
    ("SouthernPunkRock", "Southern Punk Rock"),
    ("SouthernRock", "Southern Rock"),
    ("SpeechSample", "Speech Sample"),
    ("StonerRock", "Stoner Rock"),
    ("SurfPunk", "Surf Punk"),
    ("SurfRock", "Surf Rock"),
    ("Swing", "Swing"),
    ("SynthPop", "Synth-pop"),
    ("Techno", "Techno"),
    ("ThrashMetal", "Thrash Metal"),
    ("TraditionalPop", "Traditional Pop"),
    ("Trance", "Trance"),
    ("TripHop", "Trip hop"),
    ("UkrainianPop", "Ukrainian Pop"),
    ("Urbano", "Urbano"),
    ("Volksmusik", "Volksmusik"),
    ("World", "World"),
    ("Zydeco", "Zydeco"),
];
