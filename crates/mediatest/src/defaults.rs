// The collection's split: party-friendly genres in the primary library,
// everything else in the secondary one.

pub const PRIMARY_GENRES: &[&str] = &[
    "Afrobeat",
    "Afropop",
    "ArtPunk",
    "ClassicPop",
    "ClassicRock",
    "CountryPop",
    "Cumbia",
    "Dabke",
    "DanceElectronic",
    "DeepHouse",
    "Disco",
    "Downtempo",
    "DreamPop",
    "Electropop",
    "Eurodance",
    "FolkPop",
    "FrenchHouse",
    "Funk",
    "FunkMetal",
    "FunkRock",
    "FunkSoul",
    "Funktronica",
    "GlamMetal",
    "GlamRock",
    "Grunge",
    "HeavyMetal",
    "HipHop",
    "HipHopFrançais",
    "HipHopReggae",
    "House",
    "IndiePop",
    "IndieRock",
    "JapaneseRock",
    "KoreanRock",
    "KPop",
    "Latin",
    "LatinFunk",
    "LatinPop",
    "Motown",
    "NeoSoul",
    "NewAge",
    "NewDisco",
    "NewWave",
    "Norteño",
    "NuMetal",
    "Pop",
    "PopFrançaise",
    "PopItaliano",
    "PopPunk",
    "PopRock",
    "PostBlackMetal",
    "PostHardcore",
    "PostMetal",
    "PowerPop",
    "ProgressiveMetal",
    "PsychedelicFolk",
    "PsychedelicPop",
    "PsychedelicRock",
    "Punk",
    "PunkFrançais",
    "PunkRock",
    "ReggaeRock",
    "Reggaeton",
    "RnB",
    "RnBFrançais",
    "RnBFunk",
    "RnBInstrumental",
    "RnBSoul",
    "Rockabilly",
    "RockBrasileiro",
    "RockEnEspañol",
    "RockFrançais",
    "RockItaliano",
    "RussianPop",
    "SkaPunk",
    "SludgeMetal",
    "SophistiPop",
    "SouthernPunkRock",
    "SurfPunk",
    "SurfRock",
    "SynthPop",
    "Techno",
    "ThrashMetal",
    "TraditionalPop",
    "Trance",
    "TripHop",
    "UkrainianPop",
    "Urbano",
    "World",
];

pub const SECONDARY_GENRES: &[&str] = &[
    "AcidPunk",
    "AcidRock",
    "Alternative",
    "AlternativeMetal",
    "AlternativeRock",
    "Ambient",
    "ArtRock",
    "BigBand",
    "BlackMetal",
    "Bluegrass",
    "Blues",
    "Bollywood",
    "BossaNova",
    "Britpop",
    "Cajun",
    "Celtic",
    "CelticRock",
    "Chillwave",
    "Chinese",
    "Classical",
    "ClassicCountry",
    "ClassicProg",
    "Comedy",
    "Country",
    "DeathMetal",
    "DirtyBlues",
    "DixielandJazz",
    "DoomMetal",
    "DooWop",
    "Drumline",
    "EasyListening",
    "Electronic",
    "Electronica",
    "ElectronicInstrumental",
    "EmoPopRock",
    "Experimental",
    "ExperimentalAmbientRock",
    "Folk",
    "FolkPunk",
    "FolkRock",
    "FolkRockJazz",
    "FunkInstrumental",
    "Gospel",
    "GothRock",
    "Grindcore",
    "HipHopElectronic",
    "HipHopInstrumental",
    "HonkyTonk",
    "HorrorPunk",
    "IndieFolk",
    "Industrial",
    "IndustrialMetal",
    "Jazz",
    "JazzFunk",
    "JazzPop",
    "JazzRock",
    "Literature",
    "Metalcore",
    "NewWaveFrançais",
    "NoiseRock",
    "NuJazz",
    "NuJazzInstrumental",
    "NuMetalFrançais",
    "Political",
    "PostGrunge",
    "PostIndustrial",
    "PostPunk",
    "PostRock",
    "ProgRock",
    "ProgressivePop",
    "ProtoPunk",
    "Reggae",
    "RussianFolk",
    "Shoegaze",
    "SmoothJazz",
    "SoftRock",
    "Soundtrack",
    "SouthernRock",
    "SpeechSample",
    "StonerRock",
    "Swing",
    "Volksmusik",
    "Zydeco",
];
