//! Response models and typed request parameters.

mod account;
mod catalog;
mod common;
mod credits;
mod media;
mod movies;
mod people;
mod requests;
mod tv;

pub use account::{
    AccountDetails, Avatar, Gravatar, GuestSession, KeyValidation, RequestToken, TmdbAvatar,
};
pub use catalog::{
    ApiConfiguration, Certification, Certifications, CollectionDetails, CompanyDetails, Country,
    CountryTimezones, Department, FindResults, GenreList, ImageConfiguration, Language,
    ListDetails, ListId, ListItemStatus, NetworkDetails, ProviderCatalog, ProviderListing,
    WatchRegion, WatchRegions,
};
pub use common::{
    AccountStates, AlternativeName, AlternativeNames, AlternativeTitle, AlternativeTitles,
    AuthorDetails, Change, ChangeItem, ChangeSet, ChangedEntry, CompanySummary, DatedPage,
    DateRange, DisplayPriorities, ExternalIds, Genre, Image, ImageSet, Keyword, KeywordList,
    ListSummary, Logo, LogoSet, Paged, ProductionCountry, Rating, Review, ReviewPage,
    SpokenLanguage, Translation, TranslationData, Translations, Video, VideoList,
};
pub use credits::{
    AggregateCast, AggregateCredits, AggregateCrew, AggregateJob, AggregateRole, CastCredit,
    CreditDetails, CreditMedia, CreditSeason, Credits, CrewCredit, PersonCredit, PersonCredits,
};
pub use media::{
    CollectionSummary, EpisodeSummary, MediaSummary, MovieSummary, PersonSummary, RatedEpisode,
    RatedMovie, RatedTv, SeasonSummary, TvSummary,
};
pub use movies::{
    CountryReleaseDates, MovieDetails, MovieListMemberships, RegionProviders, ReleaseDate,
    ReleaseDates, WatchProvider, WatchProviderAvailability,
};
pub use people::PersonDetails;
pub use requests::{ChangesWindow, ExternalSource, SearchMovieParams, SearchTvParams, TimeWindow};
pub use tv::{
    ContentRating, ContentRatings, Creator, EpisodeAccountState, EpisodeDetails, EpisodeGroup,
    EpisodeGroupDetails, EpisodeGroupSummary, EpisodeGroups, OrderedEpisode, ScreenedEpisode,
    ScreenedTheatrically, SeasonAccountStates, SeasonDetails, SeasonEpisode, TvSeriesDetails,
};
