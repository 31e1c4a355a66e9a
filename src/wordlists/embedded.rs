//! Embedded word list
//!
//! A small curated list of common English words, lengths two through nine,
//! so the game runs with zero setup. Real play wants a full dictionary file
//! (e.g. words_alpha.txt) passed via `-w`.

/// Builtin word list (common English words, 2-9 letters, lowercase)
pub const BUILTIN: &[&str] = &[
    // 2 letters
    "an", "as", "at", "be", "by", "do", "go", "he", "if", "in", "is", "it", "me", "my", "no", "of",
    "on", "or", "so", "to", "up", "us", "we",
    // 3 letters
    "act", "age", "aid", "air", "and", "arm", "art", "ask", "bag", "bat", "bed", "big", "boy",
    "bus", "but", "buy", "can", "car", "cat", "cup", "cut", "day", "dog", "dot", "ear", "eat",
    "end", "eye", "far", "fit", "fly", "for", "fun", "get", "got", "hat", "her", "him", "his",
    "hit", "hot", "how", "ice", "job", "key", "kid", "law", "leg", "let", "lot", "low", "man",
    "map", "men", "mix", "net", "new", "not", "now", "nut", "oak", "odd", "off", "oil", "old",
    "one", "our", "out", "own", "pan", "pen", "pet", "pig", "pin", "pot", "put", "ran", "rat",
    "raw", "red", "row", "run", "sad", "sat", "saw", "say", "sea", "see", "set", "she", "sit",
    "six", "sky", "son", "sun", "tan", "tap", "tea", "ten", "the", "tie", "tin", "tip", "toe",
    "ton", "top", "toy", "try", "two", "use", "van", "war", "was", "way", "web", "wet", "who",
    "why", "win", "yes", "yet", "you", "zoo",
    // 4 letters
    "able", "area", "away", "back", "ball", "band", "bank", "base", "bear", "beat", "best",
    "bird", "blue", "boat", "body", "bone", "book", "born", "both", "bowl", "burn", "busy",
    "cake", "calm", "came", "camp", "card", "care", "case", "cash", "cast", "cell", "city",
    "club", "coal", "coat", "code", "cold", "come", "cook", "cool", "copy", "core", "corn",
    "cost", "crew", "crop", "dark", "data", "date", "dawn", "dead", "deal", "dear", "debt",
    "deep", "desk", "diet", "dirt", "dish", "done", "door", "down", "draw", "drew", "drop",
    "drum", "dust", "duty", "each", "earn", "ease", "east", "easy", "edge", "else", "even",
    "ever", "face", "fact", "fail", "fair", "fall", "farm", "fast", "fate", "fear", "feed",
    "feel", "feet", "fell", "felt", "file", "fill", "film", "find", "fine", "fire", "firm",
    "fish", "five", "flat", "flow", "food", "foot", "form", "fort", "four", "free", "from",
    "fuel", "full", "fund", "gain", "game", "gate", "gave", "gift", "girl", "give", "glad",
    "goal", "goat", "gold", "gone", "good", "gray", "grew", "grow", "hair", "half", "hall",
    "hand", "hang", "hard", "harm", "hate", "have", "head", "hear", "heat", "held", "help",
    "here", "hide", "high", "hill", "hold", "hole", "home", "hope", "horn", "host", "hour",
    "huge", "hunt", "hurt", "idea", "inch", "into", "iron", "item", "join", "jump", "just",
    "keen", "keep", "kept", "kind", "king", "knee", "knew", "know", "lack", "lady", "laid",
    "lake", "land", "lane", "last", "late", "lead", "leaf", "left", "lend", "less", "life",
    "lift", "like", "line", "link", "lion", "list", "live", "load", "loan", "lock", "long",
    "look", "lord", "lose", "loss", "lost", "loud", "love", "luck", "made", "mail", "main",
    "make", "many", "mark", "mass", "meal", "mean", "meat", "meet", "mild", "mile", "milk",
    "mind", "mine", "miss", "mood", "moon", "more", "most", "move", "much", "must", "name",
    "near", "neat", "neck", "need", "news", "next", "nice", "nine", "none", "noon", "nose",
    "note", "noun", "once", "only", "onto", "open", "oval", "oven", "over", "pace", "pack",
    "page", "paid", "pain", "pair", "park", "part", "past", "path", "peak", "pick", "pile",
    "pine", "pink", "plan", "play", "plot", "plus", "pond", "pool", "poor", "port", "post",
    "pour", "pull", "pure", "push", "race", "rain", "rank", "rare", "rate", "read", "real",
    "rent", "rest", "rice", "rich", "ride", "ring", "rise", "risk", "road", "rock", "role",
    "roll", "roof", "room", "root", "rope", "rose", "rule", "rush", "safe", "said", "sail",
    "salt", "same", "sand", "save", "seat", "seed", "seek", "seem", "seen", "self", "sell",
    "send", "sent", "ship", "shoe", "shop", "shot", "show", "shut", "side", "sign", "site",
    "size", "skin", "slip", "slow", "snow", "soft", "soil", "sold", "some", "song", "soon",
    "sort", "soul", "spot", "star", "stay", "step", "stop", "such", "suit", "sure", "take",
    "tale", "talk", "tall", "tank", "tape", "task", "team", "tell", "tend", "tent", "term",
    "test", "text", "than", "that", "them", "then", "they", "thin", "this", "tide", "tile",
    "time", "tiny", "told", "tone", "took", "tool", "torn", "tour", "town", "tree", "trip",
    "true", "tune", "turn", "twin", "type", "unit", "upon", "used", "user", "vary", "vast",
    "very", "view", "vote", "wage", "wait", "wake", "walk", "wall", "want", "ward", "warm",
    "warn", "wash", "wave", "weak", "wear", "week", "well", "went", "were", "west", "what",
    "when", "wide", "wife", "wild", "will", "wind", "wine", "wing", "wire", "wise", "wish",
    "with", "wood", "wool", "word", "wore", "work", "worn", "yard", "year", "your", "zero",
    "zone",
    // 5 letters
    "about", "above", "actor", "admit", "adopt", "after", "again", "agent", "agree", "ahead",
    "alarm", "album", "alert", "alive", "allow", "alone", "along", "among", "anger", "angle",
    "angry", "apart", "apple", "apply", "argue", "arise", "aside", "avoid", "award", "aware",
    "basic", "beach", "began", "begin", "being", "below", "bench", "birth", "black", "blame",
    "blind", "block", "blood", "board", "bound", "brain", "brand", "bread", "break", "brick",
    "brief", "bring", "broad", "broke", "brown", "build", "built", "cabin", "cable", "carry",
    "catch", "cause", "chain", "chair", "chart", "chase", "cheap", "check", "chest", "chief",
    "child", "civil", "claim", "class", "clean", "clear", "climb", "clock", "close", "cloth",
    "cloud", "coach", "coast", "count", "court", "cover", "crack", "craft", "crash", "cream",
    "crime", "cross", "crowd", "crown", "cycle", "daily", "dance", "death", "delay", "depth",
    "dozen", "draft", "drama", "drawn", "dream", "dress", "drink", "drive", "drove", "eager",
    "early", "earth", "eight", "elder", "empty", "enemy", "enjoy", "enter", "equal", "error",
    "event", "every", "exact", "exist", "extra", "faith", "false", "fault", "fence", "field",
    "fifth", "fifty", "fight", "final", "first", "fixed", "flash", "fleet", "floor", "fluid",
    "focus", "force", "forth", "forty", "found", "frame", "fresh", "front", "fruit", "fully",
    "funny", "giant", "given", "glass", "globe", "grace", "grade", "grain", "grand", "grant",
    "grass", "great", "green", "group", "grown", "guard", "guess", "guest", "guide", "happy",
    "harsh", "heart", "heavy", "hence", "horse", "hotel", "house", "human", "ideal", "image",
    "index", "inner", "input", "issue", "joint", "judge", "juice", "knife", "known", "label",
    "large", "later", "laugh", "layer", "learn", "least", "leave", "legal", "level", "light",
    "limit", "local", "logic", "loose", "lower", "lucky", "lunch", "magic", "major", "maker",
    "march", "match", "maybe", "mayor", "meant", "media", "metal", "might", "minor", "minus",
    "mixed", "model", "money", "month", "moral", "motor", "mount", "mouse", "mouth", "movie",
    "music", "nerve", "never", "night", "noise", "north", "noted", "novel", "nurse", "occur",
    "ocean", "offer", "often", "order", "other", "ought", "outer", "owner", "paint", "panel",
    "paper", "party", "peace", "phase", "phone", "photo", "piano", "piece", "pilot", "pitch",
    "place", "plain", "plane", "plant", "plate", "point", "pound", "power", "press", "price",
    "pride", "prime", "print", "prior", "prize", "proof", "proud", "prove", "queen", "quick",
    "quiet", "quite", "radio", "raise", "range", "rapid", "ratio", "reach", "ready", "refer",
    "right", "rigid", "river", "rough", "round", "route", "royal", "rural", "scale", "scene",
    "scope", "score", "sense", "serve", "seven", "shade", "shake", "shall", "shape", "share",
    "sharp", "sheet", "shelf", "shell", "shift", "shine", "shirt", "shock", "shoot", "shore",
    "short", "shown", "sight", "since", "sixth", "sixty", "skill", "sleep", "slide", "small",
    "smart", "smile", "smoke", "solid", "solve", "sorry", "sound", "south", "space", "spare",
    "speak", "speed", "spend", "spent", "split", "spoke", "sport", "staff", "stage", "stand",
    "start", "state", "steam", "steel", "stick", "still", "stock", "stone", "stood", "store",
    "storm", "story", "strip", "stuck", "study", "stuff", "style", "sugar", "sweet", "table",
    "taken", "taste", "teach", "teeth", "thank", "theft", "their", "theme", "there", "these",
    "thick", "thing", "think", "third", "those", "three", "threw", "throw", "tight", "tired",
    "title", "today", "topic", "total", "touch", "tough", "tower", "track", "trade", "train",
    "treat", "trend", "trial", "tried", "truck", "truly", "trust", "truth", "twice", "uncle",
    "under", "union", "unity", "until", "upper", "upset", "urban", "usage", "usual", "valid",
    "value", "video", "visit", "vital", "voice", "waste", "watch", "water", "wheel", "where",
    "which", "while", "white", "whole", "whose", "woman", "women", "world", "worry", "worse",
    "worst", "worth", "would", "wound", "write", "wrong", "wrote", "young", "youth",
    // 6 letters
    "accept", "across", "action", "active", "actual", "advice", "afford", "afraid", "agency",
    "almost", "always", "amount", "animal", "annual", "answer", "anyone", "appear", "around",
    "arrive", "artist", "aspect", "assume", "attack", "attend", "author", "battle", "beauty",
    "became", "become", "before", "behind", "belief", "belong", "beside", "better", "beyond",
    "border", "bottle", "bottom", "bought", "branch", "breath", "bridge", "bright", "broken",
    "budget", "burden", "button", "camera", "cannot", "carbon", "career", "castle", "caught",
    "center", "chance", "change", "charge", "choice", "choose", "chosen", "church", "circle",
    "client", "closed", "coffee", "column", "coming", "common", "copper", "corner", "county",
    "couple", "course", "create", "credit", "crisis", "custom", "damage", "danger", "dealer",
    "debate", "decade", "decide", "defeat", "defend", "define", "degree", "demand", "depend",
    "desert", "design", "desire", "detail", "device", "differ", "dinner", "direct", "doctor",
    "dollar", "double", "driven", "driver", "during", "easily", "editor", "effect", "effort",
    "either", "eleven", "emerge", "empire", "employ", "enable", "ending", "energy", "engage",
    "engine", "enough", "ensure", "entire", "escape", "estate", "expect", "expert", "export",
    "extend", "extent", "fabric", "factor", "failed", "fairly", "fallen", "family", "famous",
    "father", "fellow", "female", "figure", "finger", "finish", "flight", "flying", "follow",
    "forest", "forget", "formal", "format", "former", "fought", "fourth", "friend", "future",
    "garden", "gather", "gender", "global", "golden", "ground", "growth", "guilty", "handle",
    "happen", "hardly", "health", "height", "hidden", "holder", "honest", "impact", "import",
    "income", "indeed", "injury", "inside", "intend", "invest", "island", "itself", "jacket",
    "junior", "killed", "latest", "latter", "launch", "lawyer", "leader", "league", "legacy",
    "length", "lesson", "letter", "likely", "liquid", "listen", "little", "living", "losing",
    "luxury", "mainly", "making", "manage", "manner", "manual", "margin", "marine", "market",
    "master", "matter", "mature", "medium", "member", "memory", "mental", "merely", "method",
    "middle", "minute", "mirror", "mobile", "modern", "modest", "module", "moment", "mostly",
    "mother", "motion", "moving", "murder", "museum", "mutual", "myself", "narrow", "nation",
    "native", "nature", "nearby", "nearly", "nobody", "normal", "notice", "notion", "number",
    "object", "obtain", "office", "online", "option", "orange", "origin", "output", "palace",
    "parent", "partly", "patent", "people", "period", "permit", "person", "phrase", "picked",
    "planet", "player", "please", "plenty", "pocket", "police", "policy", "prefer", "pretty",
    "prince", "prison", "profit", "proper", "proven", "public", "pursue", "raised", "random",
    "rarely", "rather", "rating", "reason", "recall", "recent", "record", "reduce", "reform",
    "regard", "regime", "region", "relate", "relief", "remain", "remote", "remove", "repair",
    "repeat", "report", "rescue", "result", "retail", "retain", "return", "reveal", "review",
    "reward", "riding", "rising", "robust", "ruling", "safety", "salary", "sample", "saving",
    "saying", "scheme", "school", "screen", "search", "season", "second", "secret", "sector",
    "secure", "seeing", "select", "seller", "senior", "series", "server", "settle", "severe",
    "should", "signal", "signed", "silent", "silver", "simple", "simply", "single", "sister",
    "slight", "smooth", "social", "sought", "source", "speech", "spirit", "spoken", "spread",
    "spring", "square", "stable", "status", "steady", "stolen", "strain", "stream", "street",
    "stress", "strict", "strike", "string", "strong", "struck", "studio", "submit", "sudden",
    "suffer", "summer", "summit", "supply", "surely", "survey", "switch", "symbol", "system",
    "taking", "talent", "target", "taught", "tenant", "tender", "tennis", "theory", "thirty",
    "though", "threat", "thrown", "ticket", "timing", "tissue", "toward", "travel", "treaty",
    "trying", "twelve", "twenty", "unable", "unique", "united", "unless", "unlike", "update",
    "useful", "valley", "varied", "vendor", "versus", "victim", "vision", "visual", "volume",
    "wealth", "weekly", "weight", "window", "winner", "winter", "within", "wonder", "worker",
    "writer", "yellow",
    // 7 letters
    "ability", "absence", "account", "achieve", "acquire", "address", "advance", "adviser",
    "against", "airline", "airport", "alcohol", "already", "analyst", "ancient", "another",
    "anxiety", "anybody", "applied", "arrange", "arrival", "article", "assault", "attempt",
    "attract", "auction", "average", "backing", "balance", "banking", "barrier", "battery",
    "bearing", "because", "bedroom", "believe", "beneath", "benefit", "besides", "between",
    "billion", "binding", "brother", "brought", "burning", "cabinet", "calling", "capable",
    "capital", "captain", "capture", "careful", "carrier", "caution", "ceiling", "central",
    "century", "certain", "chamber", "channel", "chapter", "charity", "charter", "checked",
    "chicken", "chronic", "circuit", "classic", "climate", "closing", "clothes", "collect",
    "college", "combine", "comfort", "command", "comment", "company", "compare", "compete",
    "complex", "concept", "concern", "concert", "conduct", "confirm", "connect", "consent",
    "consist", "contact", "contain", "content", "contest", "context", "control", "convert",
    "correct", "council", "counsel", "counter", "country", "crucial", "crystal", "culture",
    "current", "cutting", "dealing", "decided", "decline", "default", "deficit", "deliver",
    "density", "deposit", "despite", "destroy", "develop", "devoted", "diamond", "digital",
    "discuss", "disease", "display", "dispute", "distant", "diverse", "divided", "drawing",
    "driving", "dynamic", "eastern", "economy", "edition", "element", "engaged", "enhance",
    "essence", "evening", "exactly", "examine", "example", "exclude", "exhibit", "expense",
    "explain", "explore", "express", "extreme", "factory", "faculty", "failing", "failure",
    "fashion", "feature", "federal", "feeling", "fiction", "fifteen", "finance", "finding",
    "fishing", "fitness", "foreign", "forever", "formula", "fortune", "forward", "founder",
    "freedom", "further", "gallery", "general", "genetic", "genuine", "greater", "hanging",
    "heading", "healthy", "heavily", "helpful", "herself", "highway", "himself", "history",
    "holding", "holiday", "housing", "however", "hundred", "hunting", "husband", "illegal",
    "illness", "imagine", "improve", "include", "initial", "inquiry", "insight", "install",
    "instead", "intense", "involve", "journal", "journey", "justice", "justify", "keeping",
    "kitchen", "landing", "largely", "lasting", "leading", "learned", "leather", "lecture",
    "leisure", "liberal", "liberty", "library", "licence", "listing", "machine", "manager",
    "married", "massive", "maximum", "meaning", "measure", "medical", "meeting", "mention",
    "message", "million", "mineral", "minimum", "missing", "mission", "mistake", "mixture",
    "monitor", "monthly", "morning", "musical", "mystery", "natural", "neither", "nervous",
    "network", "nothing", "nuclear", "obvious", "officer", "ongoing", "opening", "operate",
    "opinion", "outcome", "outside", "overall", "package", "parking", "partial", "partner",
    "passage", "passing", "passion", "patient", "pattern", "payment", "pending", "pension",
    "percent", "perfect", "perform", "perhaps", "picture", "pioneer", "plastic", "pointed",
    "popular", "portion", "poverty", "precise", "predict", "premier", "premium", "prepare",
    "present", "prevent", "primary", "printer", "privacy", "private", "problem", "proceed",
    "process", "produce", "product", "profile", "program", "project", "promise", "promote",
    "propose", "protect", "protein", "protest", "provide", "publish", "purpose", "pushing",
    "quality", "quarter", "radical", "railway", "reading", "reality", "realize", "receipt",
    "receive", "recover", "reflect", "regular", "related", "release", "remains", "removal",
    "removed", "replace", "request", "require", "reserve", "resolve", "respect", "respond",
    "restore", "retired", "revenue", "reverse", "running", "satisfy", "science", "section",
    "segment", "serious", "service", "serving", "session", "setting", "seventh", "several",
    "shortly", "showing", "silence", "similar", "sitting", "sixteen", "skilled", "society",
    "somehow", "someone", "speaker", "special", "species", "sponsor", "station", "storage",
    "strange", "stretch", "student", "subject", "succeed", "success", "suggest", "summary",
    "support", "suppose", "supreme", "surface", "surgery", "surplus", "survive", "suspect",
    "sustain", "teacher", "telling", "tension", "theatre", "therapy", "thereby", "thought",
    "through", "tonight", "totally", "tourism", "tourist", "towards", "traffic", "trouble",
    "turning", "typical", "uniform", "unknown", "unusual", "upgrade", "utility", "variety",
    "various", "vehicle", "venture", "version", "veteran", "victory", "village", "vintage",
    "violent", "virtual", "visible", "waiting", "walking", "warning", "wealthy", "weather",
    "wedding", "weekend", "welcome", "welfare", "western", "whereas", "whether", "willing",
    "winning", "without", "witness", "working", "writing", "written",
    // 8 letters
    "absolute", "abstract", "academic", "accident", "accuracy", "achieved", "activity",
    "actually", "addition", "adequate", "advanced", "advisory", "advocate", "affected",
    "aircraft", "alliance", "although", "analysis", "announce", "anything", "anywhere",
    "apparent", "approach", "approval", "argument", "artistic", "assembly", "audience",
    "bachelor", "bacteria", "baseball", "bathroom", "becoming", "birthday", "boundary",
    "breaking", "building", "business", "calendar", "campaign", "capacity", "category",
    "chairman", "champion", "chemical", "children", "circular", "civilian", "clearing",
    "clinical", "clothing", "collapse", "colonial", "combined", "commerce", "complain",
    "complete", "composed", "compound", "comprise", "computer", "conclude", "concrete",
    "conflict", "confused", "congress", "consider", "constant", "consumer", "continue",
    "contract", "contrary", "contrast", "convince", "corridor", "coverage", "creative",
    "criminal", "critical", "crossing", "cultural", "currency", "customer", "database",
    "daughter", "deadline", "decision", "decrease", "definite", "delicate", "delivery",
    "describe", "designer", "detailed", "dialogue", "directly", "director", "disabled",
    "disaster", "disclose", "discount", "discover", "disorder", "disposal", "distance",
    "distinct", "district", "dividend", "division", "doctrine", "document", "domestic",
    "dominant", "dominate", "doubtful", "dramatic", "duration", "dynamics", "earnings",
    "economic", "educated", "eighteen", "election", "electric", "eligible", "emphasis",
    "employee", "engineer", "enormous", "entirely", "entrance", "envelope", "equation",
    "estimate", "evaluate", "eventual", "everyone", "evidence", "exchange", "exciting",
    "exercise", "existing", "expected", "explicit", "exposure", "extended", "external",
    "facility", "familiar", "featured", "feedback", "festival", "finished", "flexible",
    "floating", "football", "forecast", "formerly", "fourteen", "fraction", "frequent",
    "friendly", "frontier", "function", "generate", "generous", "graduate", "graphics",
    "grateful", "guardian", "guidance", "handling", "hardware", "heritage", "historic",
    "homeless", "hospital", "humanity", "identify", "identity", "ideology", "imperial",
    "incident", "increase", "indicate", "industry", "informal", "inherent", "initiate",
    "innocent", "instance", "integral", "intended", "interest", "interior", "internal",
    "interval", "intimate", "invasion", "involved", "isolated", "judgment", "junction",
    "keyboard", "landlord", "language", "laughter", "learning", "leverage", "lifetime",
    "likewise", "literary", "location", "magnetic", "maintain", "majority", "marginal",
    "marriage", "material", "maturity", "meantime", "measured", "medicine", "medieval",
    "memorial", "merchant", "midnight", "military", "minister", "minority", "moderate",
    "momentum", "monetary", "moreover", "mortgage", "mountain", "movement", "multiple",
    "national", "negative", "normally", "northern", "notebook", "numerous", "observer",
    "occasion", "offering", "official", "operator", "opponent", "opposite", "optimism",
    "ordinary", "organize", "original", "overcome", "overhead", "overseas", "overview",
    "painting", "parallel", "patience", "peaceful", "periodic", "personal", "persuade",
    "petition", "physical", "planning", "platform", "pleasant", "pleasure", "politics",
    "portable", "portrait", "position", "positive", "possible", "powerful", "practice",
    "precious", "pregnant", "presence", "preserve", "pressing", "pressure", "previous",
    "princess", "priority", "probable", "probably", "producer", "profound", "progress",
    "property", "proposal", "prospect", "protocol", "provided", "provider", "province",
    "publicly", "purchase", "quantity", "question", "rational", "reaction", "recovery",
    "regional", "register", "relation", "relative", "relevant", "reliable", "religion",
    "remember", "renowned", "repeated", "reporter", "republic", "required", "research",
    "reserved", "resident", "resource", "response", "restrict", "revision", "rigorous",
    "romantic", "sanction", "scenario", "schedule", "scrutiny", "seasonal", "secondly",
    "security", "selected", "sentence", "separate", "sequence", "sergeant", "severely",
    "shortage", "shoulder", "simplify", "situated", "slightly", "software", "solution",
    "somebody", "somewhat", "southern", "speaking", "specific", "spectrum", "sporting",
    "standard", "standing", "stranger", "strategy", "strength", "striking", "struggle",
    "stunning", "suburban", "suitable", "superior", "supposed", "surprise", "survival",
    "sweeping", "sympathy", "syndrome", "takeover", "tangible", "taxation", "teaching",
    "tendency", "terminal", "terrible", "thinking", "thirteen", "thorough", "thousand",
    "tomorrow", "tracking", "training", "transfer", "treasury", "triangle", "tropical",
    "turnover", "ultimate", "umbrella", "universe", "unlikely", "valuable", "variable",
    "vertical", "violence", "volatile", "warranty", "weakness", "whatever", "whenever",
    "wildlife", "withdraw", "workshop", "yourself",
    // 9 letters
    "adventure", "aftermath", "afternoon", "agreement", "attention", "available", "awareness",
    "beautiful", "beginning", "breakfast", "brilliant", "broadcast", "carefully", "celebrate",
    "challenge", "character", "childhood", "chocolate", "classroom", "colleague", "collision",
    "committee", "community", "component", "condition", "confident", "confusion", "container",
    "countdown", "criterion", "dangerous", "dedicated", "democracy", "departure", "different",
    "dimension", "direction", "discovery", "diversity", "education", "effective", "emergency",
    "emotional", "essential", "establish", "excellent", "exception", "excessive", "executive",
    "existence", "expansion", "expensive", "extension", "extensive", "favourite", "financial",
    "framework", "furniture", "gathering", "generally", "guarantee", "guideline", "highlight",
    "household", "immediate", "important", "incentive", "inclusion", "incorrect", "increased",
    "infection", "inflation", "influence", "insurance", "intention", "interface", "interview",
    "invisible", "knowledge", "landscape", "lifestyle", "marketing", "meanwhile", "narrative",
    "necessary", "newspaper", "objective", "obviously", "offensive", "operation", "orchestra",
    "packaging", "paragraph", "permanent", "political", "potential", "practical", "precision",
    "president", "principal", "principle", "privilege", "procedure", "professor", "promotion",
    "provision", "publisher", "recession", "recognize", "reduction", "reference", "rehearsal",
    "religious", "remaining", "retention", "secretary", "selection", "sensitive", "situation",
    "sometimes", "spokesman", "statement", "strategic", "structure", "substance", "successor",
    "suffering", "suggested", "technical", "technique", "telephone", "temporary", "territory",
    "therefore", "threshold", "tolerance", "tradition", "transform", "treatment", "universal",
    "valuation", "vegetable", "voluntary", "wonderful", "yesterday",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_words_are_valid() {
        for &word in BUILTIN {
            assert!(!word.is_empty(), "Empty entry in builtin list");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
            assert!(
                (2..=9).contains(&word.len()),
                "Word '{word}' has unexpected length {}",
                word.len()
            );
        }
    }

    #[test]
    fn builtin_words_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for &word in BUILTIN {
            assert!(seen.insert(word), "Duplicate word '{word}' in builtin list");
        }
    }

    #[test]
    fn builtin_contains_each_length() {
        for length in 2..=9 {
            assert!(
                BUILTIN.iter().any(|w| w.len() == length),
                "No {length}-letter words in builtin list"
            );
        }
    }
}
